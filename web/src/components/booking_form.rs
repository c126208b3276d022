use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonType, Input, InputType};

use crate::schedule::booking::FieldErrors;

/// Name/phone form shown once an hour slot is selected. Field errors render
/// under their inputs; the submit button mirrors the in-flight state so it
/// cannot read as ready while a submission is running.
#[component]
pub fn BookingForm(
    name: RwSignal<String>,
    phone: RwSignal<String>,
    field_errors: RwSignal<FieldErrors>,
    submitting: RwSignal<bool>,
    on_submit: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <form
            class="booking-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit();
            }
        >
            <div class="booking-form-group">
                <Input placeholder="Name" value=name/>
                {move || field_errors.get().name.map(|message| view! {
                    <p class="booking-field-error">{message}</p>
                })}
            </div>

            <div class="booking-form-group">
                <Input placeholder="Phone" input_type=InputType::Tel value=phone/>
                {move || field_errors.get().phone.map(|message| view! {
                    <p class="booking-field-error">{message}</p>
                })}
            </div>

            <Button
                class="booking-form-submit"
                button_type=ButtonType::Submit
                appearance=ButtonAppearance::Primary
                loading=submitting
                disabled=Signal::derive(move || submitting.get())
            >
                "Book appointment"
            </Button>
        </form>
    }
}
