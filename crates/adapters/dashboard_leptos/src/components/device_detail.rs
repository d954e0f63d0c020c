//! Register table of the selected device.

use leptos::prelude::*;
use emsdash_app::screen::{DetailView, RecordRow};

/// Register records of the selected device, with an edit control on the
/// records the viewer may write.
#[component]
pub fn DeviceDetail(
    /// What to render, see [`DetailView`].
    detail: DetailView,
    /// Called with the first-cell index of the record to edit.
    #[prop(into)]
    on_edit: Callback<usize>,
) -> impl IntoView {
    match detail {
        DetailView::Hidden => ().into_any(),
        DetailView::NoData { name } => view! {
            <section>
                <h2>{name}</h2>
                <p class="note">"No data available for this device"</p>
            </section>
        }
        .into_any(),
        DetailView::Records { name, rows } => view! {
            <section>
                <h2>{name}</h2>
                <table>
                    <tbody>
                        {rows.into_iter().map(|row| view! { <RecordLine row on_edit/> }).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </section>
        }
        .into_any(),
    }
}

#[component]
fn RecordLine(row: RecordRow, on_edit: Callback<usize>) -> impl IntoView {
    let index = row.index;
    view! {
        <tr>
            <td>
                {row.editable.then(|| view! {
                    <button title="Change value" on:click=move |_| on_edit.run(index)>"\u{270E}"</button>
                })}
            </td>
            <td>{row.label}</td>
            <td>{row.value}</td>
        </tr>
    }
}
