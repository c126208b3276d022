use leptos::prelude::*;
use shared_types::DaySlots;

use crate::schedule::selection::Selection;

/// One period ("Morning"/"Afternoon") of the hour picker. Every availability
/// entry renders its two half-hour slots; unavailable slots stay disabled.
#[component]
pub fn SlotGrid(
    title: &'static str,
    slots: Vec<DaySlots>,
    selection: RwSignal<Selection>,
) -> impl IntoView {
    view! {
        <section class="slot-section">
            <strong>{title}</strong>
            <div class="slot-grid">
                {slots
                    .into_iter()
                    .map(|slot| view! {
                        <div class="slot-pair">
                            <HourButton
                                label=slot.full_hour
                                available=slot.full_hour_available
                                selection=selection
                            />
                            <HourButton
                                label=slot.half_hour
                                available=slot.half_hour_available
                                selection=selection
                            />
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HourButton(label: String, available: bool, selection: RwSignal<Selection>) -> impl IntoView {
    let selected_label = label.clone();
    let picked_label = label.clone();

    view! {
        <button
            class="hour-slot"
            class:selected=move || {
                selection.read().selected_hour() == Some(selected_label.as_str())
            }
            class:unavailable=!available
            disabled=!available
            on:click=move |_| {
                selection.update(|s| {
                    s.pick_hour(&picked_label, available);
                });
            }
        >
            <p>{label}</p>
        </button>
    }
}
