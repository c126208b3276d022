use leptos::prelude::*;
use shared_types::Appointment;

use crate::schedule::availability::hour_label;
use crate::schedule::phone::format_phone;

/// One appointment row: hour badge, client avatar, name and formatted phone.
#[component]
pub fn AppointmentCard(appointment: Appointment) -> impl IntoView {
    view! {
        <div class="appointment-card">
            <span class="appointment-hour">
                <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <circle cx="12" cy="12" r="10"></circle>
                    <polyline points="12 6 12 12 16 14"></polyline>
                </svg>
                {hour_label(&appointment.date)}
            </span>

            <div class="appointment-client">
                <img src=appointment.user.avatar_url.clone() alt=appointment.user.name.clone()/>
                <div>
                    <strong>{appointment.name.clone()}</strong>
                    <p>{format_phone(&appointment.phone)}</p>
                </div>
            </div>
        </div>
    }
}
