mod devices;
mod not_found;

pub use devices::Devices;
pub use not_found::NotFound;
