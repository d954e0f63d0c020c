//! Device list component.

use leptos::prelude::*;
use emsdash_domain::device::Device;
use emsdash_domain::id::DeviceId;

const NO_DEVICES: &str = "No EMS devices found. Check the connections and for possible Tx errors.";

/// A table of the devices discovered on the bus, already sorted by type.
#[component]
pub fn DeviceList(
    /// The devices to display, in display order.
    devices: Vec<Device>,
    /// Currently selected device, highlighted.
    #[prop(into)]
    selected: Signal<Option<DeviceId>>,
    /// Called with the id of a clicked device.
    #[prop(into)]
    on_select: Callback<DeviceId>,
) -> impl IntoView {
    if devices.is_empty() {
        return view! {
            <p class="banner-error">{NO_DEVICES}</p>
        }
        .into_any();
    }

    view! {
        <table>
            <thead>
                <tr>
                    <th>"Type"</th>
                    <th>"Name"</th>
                </tr>
            </thead>
            <tbody>
                {devices.into_iter().map(|device| {
                    view! {
                        <DeviceRow device selected on_select/>
                    }
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

/// A single row in the device list.
#[component]
fn DeviceRow(
    /// The device to display.
    device: Device,
    selected: Signal<Option<DeviceId>>,
    on_select: Callback<DeviceId>,
) -> impl IntoView {
    let id = device.id;
    let details = device.details();
    let name = device.display_name();

    view! {
        <tr
            class:selected=move || selected.get() == Some(id)
            on:click=move |_| on_select.run(id)
        >
            <td>
                <button title=details>{device.device_type}</button>
            </td>
            <td>{name}</td>
        </tr>
    }
}
