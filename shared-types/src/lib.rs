use serde::{Deserialize, Serialize};

/// A service professional whose calendar can be booked.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar_url: String,
}

/// One calendar day of a month-availability response.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    pub day: u32,
    pub available: bool,
}

/// Two bookable half-hour slots of one hour of a provider's day.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DaySlots {
    pub hour: u32,
    pub full_hour: String,
    pub full_hour_available: bool,
    pub half_hour: String,
    pub half_hour_available: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppointmentUser {
    pub name: String,
    pub avatar_url: String,
    pub phone: String,
}

/// A booked appointment on the signed-in provider's schedule.
/// `date` is the ISO-8601 timestamp as sent by the backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: String,
    pub date: String,
    pub name: String,
    pub phone: String,
    pub user: AppointmentUser,
}

/// Body of the create-appointment request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub name: String,
    pub phone: String,
    pub provider_id: String,
    pub date: String,
}
