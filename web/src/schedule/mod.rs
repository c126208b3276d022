//! Pure booking-state logic for the two screens: phone formatting, month and
//! day availability derivations, the date/hour selection rules, and booking
//! form validation. Everything here is side-effect free so it can be tested
//! without a browser or a backend.

pub mod availability;
pub mod booking;
pub mod phone;
pub mod selection;
