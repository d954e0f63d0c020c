//! Edit form for a register value.

use leptos::prelude::*;
use emsdash_domain::device_value::{DeviceValue, DeviceValueField};
use emsdash_domain::format::format_unit;

/// Modal form editing the in-progress [`DeviceValue`].
#[component]
pub fn ValueForm(
    /// The value being edited.
    value: DeviceValue,
    /// Called on every keystroke with the changed field.
    #[prop(into)]
    on_change: Callback<(DeviceValueField, String)>,
    #[prop(into)]
    on_cancel: Callback<()>,
    #[prop(into)]
    on_submit: Callback<()>,
) -> impl IntoView {
    let unit = format_unit(Some(value.uom.as_str()).filter(|u| !u.is_empty()));

    view! {
        <div class="dialog-backdrop">
            <form
                class="dialog"
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <h3>"Change value"</h3>
                <p>{value.name}</p>
                <label>
                    <input
                        type="text"
                        prop:value=value.data
                        on:input=move |ev| on_change.run((DeviceValueField::Data, event_target_value(&ev)))
                    />
                    {unit}
                </label>
                <div class="dialog-actions">
                    <button type="button" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button type="submit">"Save"</button>
                </div>
            </form>
        </div>
    }
}
