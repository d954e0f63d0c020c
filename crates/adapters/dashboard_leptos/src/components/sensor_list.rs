//! Dallas sensor list component.

use leptos::prelude::*;
use emsdash_domain::sensor::Sensor;

/// A table of the external temperature sensors.
#[component]
pub fn SensorList(
    /// The sensors to display.
    sensors: Vec<Sensor>,
) -> impl IntoView {
    if sensors.is_empty() {
        return view! {
            <p class="note">"no external temperature sensors were detected"</p>
        }
        .into_any();
    }

    view! {
        <table>
            <thead>
                <tr>
                    <th>"Sensor #"</th>
                    <th>"ID"</th>
                    <th>"Temperature"</th>
                </tr>
            </thead>
            <tbody>
                {sensors.into_iter().map(|sensor| {
                    let temp = sensor.formatted_temp();
                    view! {
                        <tr>
                            <td>{sensor.no}</td>
                            <td>{sensor.id}</td>
                            <td>{temp}</td>
                        </tr>
                    }
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
