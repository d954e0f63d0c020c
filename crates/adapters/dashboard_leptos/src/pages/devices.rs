//! Devices page: device list, register detail, sensors and bus scan.

use leptos::prelude::*;
use leptos::task::spawn_local;

use emsdash_app::screen::DevicesScreen;
use emsdash_app::services::devices_service::DevicesService;
use emsdash_domain::device_value::DeviceValueField;
use emsdash_domain::id::DeviceId;

use crate::api::GlooGateway;
use crate::components::{
    DeviceDetail, DeviceList, ScanConfirmationDialog, SensorList, ValueForm, use_toasts,
};

/// Shown in place of the tables until devices and sensors arrive.
fn inventory_placeholder() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="spinner" aria-hidden="true"></span>
            <span>"Loading devices\u{2026}"</span>
        </div>
    }
}

/// Devices page.
#[component]
pub fn Devices() -> impl IntoView {
    let service = DevicesService::new(GlooGateway, use_toasts());
    let screen = RwSignal::new(DevicesScreen::new());

    let loaded = LocalResource::new({
        let service = service.clone();
        move || {
            let service = service.clone();
            async move {
                let viewer = service.load_viewer().await;
                let inventory = service.load_inventory().await;
                let ok = inventory.is_some();
                screen.update(|s| {
                    s.set_viewer(viewer);
                    if let Some(inventory) = inventory {
                        s.set_inventory(inventory);
                    }
                });
                ok
            }
        }
    });

    // Memos keep the tables from re-rendering on every keystroke in the form.
    let devices = Memo::new(move |_| screen.with(DevicesScreen::devices));
    let sensors = Memo::new(move |_| screen.with(|s| s.sensors().to_vec()));
    let detail = Memo::new(move |_| screen.with(DevicesScreen::detail));
    let editing = Memo::new(move |_| screen.with(|s| s.editing().is_some()));
    let selected = Signal::derive(move || screen.with(DevicesScreen::selected));
    let scan_state = Signal::derive(move || screen.with(DevicesScreen::scan));

    let on_select = Callback::new({
        let service = service.clone();
        move |id: DeviceId| {
            let request = screen.try_update(|s| s.select_device(id));
            let Some(request) = request else {
                return;
            };
            let service = service.clone();
            spawn_local(async move {
                let response = service.fetch_device_data(request).await;
                screen.update(|s| {
                    service.settle_device_data(s, response);
                });
            });
        }
    });

    let on_edit = Callback::new(move |index: usize| {
        screen.update(|s| {
            s.send_command(index);
        });
    });

    let on_change = Callback::new(move |(field, value): (DeviceValueField, String)| {
        screen.update(|s| s.handle_value_change(field, value));
    });

    let on_cancel_edit = Callback::new(move |()| {
        screen.update(DevicesScreen::cancel_editing_value);
    });

    let on_submit = Callback::new({
        let service = service.clone();
        move |()| {
            let Some(value) = screen.try_update(DevicesScreen::done_editing_value).flatten() else {
                return;
            };
            let service = service.clone();
            spawn_local(async move {
                service.write_value(value).await;
            });
        }
    });

    let on_cancel_scan = Callback::new(move |()| {
        screen.update(DevicesScreen::cancel_scan);
    });

    let on_confirm_scan = Callback::new(move |()| {
        if screen.try_update(DevicesScreen::confirm_scan) != Some(true) {
            return;
        }
        let service = service.clone();
        spawn_local(async move {
            service.scan_devices().await;
            screen.update(DevicesScreen::finish_scan);
        });
    });

    view! {
        <div>
            <h1>"EMS Devices"</h1>
            <div class="toolbar">
                <button on:click=move |_| loaded.refetch()>"Refresh"</button>
                <button on:click=move |_| screen.update(DevicesScreen::request_scan)>
                    "Scan Devices"
                </button>
            </div>
            <Suspense fallback=inventory_placeholder>
                {move || {
                    loaded.get().map(|ok| {
                        if ok {
                            view! {
                                <h2>"Devices"</h2>
                                {move || view! {
                                    <DeviceList devices=devices.get() selected on_select/>
                                }}
                                {move || view! {
                                    <DeviceDetail detail=detail.get() on_edit/>
                                }}
                                <h2>"Sensors"</h2>
                                {move || view! { <SensorList sensors=sensors.get()/> }}
                            }
                            .into_any()
                        } else {
                            view! {
                                <p class="error">"Failed to load devices."</p>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
            <ScanConfirmationDialog
                state=scan_state
                on_cancel=on_cancel_scan
                on_confirm=on_confirm_scan
            />
            {move || {
                editing
                    .get()
                    .then(|| screen.with_untracked(|s| s.editing().cloned()))
                    .flatten()
                    .map(|value| view! {
                        <ValueForm
                            value
                            on_change
                            on_cancel=on_cancel_edit
                            on_submit
                        />
                    })
            }}
        </div>
    }
}
