//! Scan confirmation dialog.

use leptos::prelude::*;
use emsdash_app::screen::ScanDialog;

/// Asks the user to confirm a bus scan.
///
/// Renders nothing while [`ScanDialog::Closed`]; the start button is disabled
/// while the scan request is in flight.
#[component]
pub fn ScanConfirmationDialog(
    #[prop(into)]
    state: Signal<ScanDialog>,
    #[prop(into)]
    on_cancel: Callback<()>,
    #[prop(into)]
    on_confirm: Callback<()>,
) -> impl IntoView {
    move || {
        let dialog = state.get();
        dialog.is_open().then(|| {
            let processing = dialog.is_processing();
            view! {
                <div class="dialog-backdrop">
                    <div class="dialog" role="dialog">
                        <h3>{ScanDialog::TITLE}</h3>
                        <p>{ScanDialog::PROMPT}</p>
                        <div class="dialog-actions">
                            <button disabled=processing on:click=move |_| on_cancel.run(())>
                                "Cancel"
                            </button>
                            <button disabled=processing on:click=move |_| on_confirm.run(())>
                                {if processing { "Scanning\u{2026}" } else { "Start Scan" }}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
