mod device_detail;
mod device_list;
mod scan_dialog;
mod sensor_list;
pub mod toast;
mod value_form;

pub use device_detail::DeviceDetail;
pub use device_list::DeviceList;
pub use scan_dialog::ScanConfirmationDialog;
pub use sensor_list::SensorList;
pub use toast::{ToastContainer, ToastProvider, use_toasts};
pub use value_form::ValueForm;
