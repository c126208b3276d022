use leptos::prelude::*;
use leptos::server;
use shared_types::{Appointment, DaySlots, MonthDay, NewAppointment, Provider};

#[cfg(feature = "ssr")]
use crate::api::BookingApi;

#[cfg(feature = "ssr")]
fn booking_api() -> Result<BookingApi, ServerFnError> {
    BookingApi::from_env().map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn get_providers() -> Result<Vec<Provider>, ServerFnError> {
    booking_api()?
        .get("/providers", &[])
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch providers: {}", e)))
}

#[server]
pub async fn get_month_availability(
    provider_id: String,
    year: i32,
    month: u32,
) -> Result<Vec<MonthDay>, ServerFnError> {
    booking_api()?
        .get(
            &format!("/providers/{}/month-availability", provider_id),
            &[("year", year.to_string()), ("month", month.to_string())],
        )
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch month availability: {}", e)))
}

#[server]
pub async fn get_day_availability(
    provider_id: String,
    year: i32,
    month: u32,
    day: u32,
) -> Result<Vec<DaySlots>, ServerFnError> {
    booking_api()?
        .get(
            &format!("/providers/{}/day-availability", provider_id),
            &[
                ("year", year.to_string()),
                ("month", month.to_string()),
                ("day", day.to_string()),
            ],
        )
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch day availability: {}", e)))
}

#[server]
pub async fn get_my_appointments(
    provider_id: String,
    year: i32,
    month: u32,
    day: u32,
) -> Result<Vec<Appointment>, ServerFnError> {
    booking_api()?
        .get(
            "/appointments/me",
            &[
                ("year", year.to_string()),
                ("month", month.to_string()),
                ("day", day.to_string()),
                ("providerId", provider_id),
            ],
        )
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch appointments: {}", e)))
}

#[server]
pub async fn create_appointment(request: NewAppointment) -> Result<(), ServerFnError> {
    booking_api()?
        .post("/appointments", &request)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to create appointment: {}", e)))
}
