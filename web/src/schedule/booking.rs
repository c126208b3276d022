use chrono::{NaiveDate, NaiveTime};

/// Per-field validation messages for the booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none()
    }
}

/// Checks the required booking fields. An empty result means the form may be
/// submitted; otherwise the flow stops before the network and the messages
/// are rendered under their fields.
pub fn validate(name: &str, phone: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }
    if phone.trim().is_empty() {
        errors.phone = Some("Phone is required".to_string());
    }
    errors
}

/// Combines the selected date with an `"HH:MM"` slot label into the local
/// ISO-8601 timestamp sent to the backend. `None` on a malformed label.
pub fn compose_timestamp(date: NaiveDate, hour_label: &str) -> Option<String> {
    let time = NaiveTime::parse_from_str(hour_label, "%H:%M").ok()?;
    Some(date.and_time(time).format("%Y-%m-%dT%H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_errors_on_name_only() {
        let errors = validate("", "11987654321");

        assert!(errors.name.is_some());
        assert!(errors.phone.is_none());
        assert!(!errors.is_empty());
    }

    #[test]
    fn blank_fields_error_individually() {
        let errors = validate("   ", "");

        assert!(errors.name.is_some());
        assert!(errors.phone.is_some());
    }

    #[test]
    fn filled_fields_validate_clean() {
        assert!(validate("Jane Doe", "11987654321").is_empty());
    }

    #[test]
    fn composes_date_and_slot_label_into_iso_timestamp() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        assert_eq!(
            compose_timestamp(date, "08:00").as_deref(),
            Some("2025-03-10T08:00:00")
        );
        assert_eq!(
            compose_timestamp(date, "14:30").as_deref(),
            Some("2025-03-10T14:30:00")
        );
    }

    #[test]
    fn malformed_slot_label_composes_to_none() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        assert!(compose_timestamp(date, "").is_none());
        assert!(compose_timestamp(date, "late").is_none());
    }
}
