use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use shared_types::{Appointment, DaySlots, MonthDay};

/// Morning/afternoon buckets of a day's entries, split at noon.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPeriods<T> {
    pub morning: Vec<T>,
    pub afternoon: Vec<T>,
}

impl<T> Default for DayPeriods<T> {
    fn default() -> Self {
        Self {
            morning: Vec::new(),
            afternoon: Vec::new(),
        }
    }
}

/// Splits `entries` into morning (hour < 12) and afternoon (hour >= 12)
/// buckets, each preserving the input order.
pub fn partition_by_hour<T: Clone>(entries: &[T], hour_of: impl Fn(&T) -> u32) -> DayPeriods<T> {
    let mut periods = DayPeriods::default();
    for entry in entries {
        if hour_of(entry) < 12 {
            periods.morning.push(entry.clone());
        } else {
            periods.afternoon.push(entry.clone());
        }
    }
    periods
}

/// Partitions a day-availability response by its `hour` field.
pub fn partition_slots(entries: &[DaySlots]) -> DayPeriods<DaySlots> {
    partition_by_hour(entries, |slot| slot.hour)
}

/// Buckets appointments by the hour of their timestamp, then sorts each
/// bucket chronologically; the backend does not guarantee response order.
/// Appointments whose timestamp does not parse are dropped.
pub fn partition_appointments(entries: &[Appointment]) -> DayPeriods<Appointment> {
    let dated: Vec<(NaiveDateTime, Appointment)> = entries
        .iter()
        .filter_map(|appointment| {
            parse_timestamp(&appointment.date).map(|at| (at, appointment.clone()))
        })
        .collect();

    let mut periods = partition_by_hour(&dated, |(at, _)| at.hour());
    periods.morning.sort_by_key(|(at, _)| *at);
    periods.afternoon.sort_by_key(|(at, _)| *at);

    DayPeriods {
        morning: periods.morning.into_iter().map(|(_, a)| a).collect(),
        afternoon: periods.afternoon.into_iter().map(|(_, a)| a).collect(),
    }
}

/// Days of the displayed month that must not be selectable: every day the
/// backend marked unavailable, plus every Sunday regardless of the response.
/// Days absent from `entries` stay enabled; day numbers that do not exist in
/// the displayed month are ignored.
pub fn disabled_dates(entries: &[MonthDay], year: i32, month: u32) -> BTreeSet<NaiveDate> {
    let mut disabled: BTreeSet<NaiveDate> = entries
        .iter()
        .filter(|entry| !entry.available)
        .filter_map(|entry| NaiveDate::from_ymd_opt(year, month, entry.day))
        .collect();

    for day in 1..=31 {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            if date.weekday() == Weekday::Sun {
                disabled.insert(date);
            }
        }
    }

    disabled
}

/// First appointment in fetch order whose timestamp is strictly after `now`.
/// Scan order is deliberate: the first future entry wins even when a later
/// entry starts sooner.
pub fn next_appointment<'a>(
    appointments: &'a [Appointment],
    now: NaiveDateTime,
) -> Option<&'a Appointment> {
    appointments
        .iter()
        .find(|appointment| matches!(parse_timestamp(&appointment.date), Some(at) if at > now))
}

/// Parses a backend timestamp, accepting RFC 3339 (`...T14:00:00Z`,
/// `...T14:00:00-03:00`) as well as the bare `YYYY-MM-DDTHH:MM:SS` shape.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok())
}

/// `"HH:MM"` label for an appointment card, empty when the timestamp is bad.
pub fn hour_label(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|at| at.format("%H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppointmentUser;

    fn slot(hour: u32) -> DaySlots {
        DaySlots {
            hour,
            full_hour: format!("{hour:02}:00"),
            full_hour_available: true,
            half_hour: format!("{hour:02}:30"),
            half_hour_available: true,
        }
    }

    fn appointment(id: &str, date: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            date: date.to_string(),
            name: "Client".to_string(),
            phone: "11987654321".to_string(),
            user: AppointmentUser {
                name: "Client".to_string(),
                avatar_url: String::new(),
                phone: "11987654321".to_string(),
            },
        }
    }

    #[test]
    fn partition_preserves_input_order_per_bucket() {
        let entries = [slot(8), slot(13), slot(9), slot(15)];
        let periods = partition_slots(&entries);

        let morning: Vec<u32> = periods.morning.iter().map(|s| s.hour).collect();
        let afternoon: Vec<u32> = periods.afternoon.iter().map(|s| s.hour).collect();
        assert_eq!(morning, vec![8, 9]);
        assert_eq!(afternoon, vec![13, 15]);
    }

    #[test]
    fn partition_buckets_are_disjoint_and_complete() {
        let entries: Vec<DaySlots> = (7..=18).map(slot).collect();
        let periods = partition_slots(&entries);

        assert_eq!(periods.morning.len() + periods.afternoon.len(), entries.len());
        assert!(periods.morning.iter().all(|s| s.hour < 12));
        assert!(periods.afternoon.iter().all(|s| s.hour >= 12));
    }

    #[test]
    fn appointments_sort_chronologically_within_buckets() {
        let entries = [
            appointment("a", "2025-03-10T10:00:00"),
            appointment("b", "2025-03-10T09:00:00"),
            appointment("c", "2025-03-10T14:00:00"),
            appointment("d", "2025-03-10T13:30:00"),
        ];
        let periods = partition_appointments(&entries);

        let morning: Vec<&str> = periods.morning.iter().map(|a| a.id.as_str()).collect();
        let afternoon: Vec<&str> = periods.afternoon.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(morning, vec!["b", "a"]);
        assert_eq!(afternoon, vec!["d", "c"]);
    }

    #[test]
    fn unparseable_appointment_timestamps_are_dropped() {
        let entries = [
            appointment("a", "not a date"),
            appointment("b", "2025-03-10T09:00:00"),
        ];
        let periods = partition_appointments(&entries);

        assert_eq!(periods.morning.len(), 1);
        assert_eq!(periods.morning[0].id, "b");
        assert!(periods.afternoon.is_empty());
    }

    #[test]
    fn disabled_dates_map_unavailable_entries_to_concrete_dates() {
        let entries = [
            MonthDay { day: 20, available: false },
            MonthDay { day: 5, available: true },
            MonthDay { day: 11, available: false },
        ];
        let disabled = disabled_dates(&entries, 2025, 3);

        assert!(disabled.contains(&NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()));
        assert!(disabled.contains(&NaiveDate::from_ymd_opt(2025, 3, 11).unwrap()));
        assert!(!disabled.contains(&NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()));
    }

    #[test]
    fn disabled_dates_always_include_sundays() {
        // March 2025 has Sundays on 2, 9, 16, 23 and 30.
        let disabled = disabled_dates(&[], 2025, 3);

        let sundays: Vec<u32> = disabled.iter().map(|d| d.day()).collect();
        assert_eq!(sundays, vec![2, 9, 16, 23, 30]);
    }

    #[test]
    fn disabled_dates_are_order_independent_and_dedupe_sundays() {
        let forward = [
            MonthDay { day: 9, available: false },
            MonthDay { day: 17, available: false },
        ];
        let backward = [
            MonthDay { day: 17, available: false },
            MonthDay { day: 9, available: false },
        ];
        // Day 9 is itself a Sunday in March 2025; it must appear once.
        assert_eq!(
            disabled_dates(&forward, 2025, 3),
            disabled_dates(&backward, 2025, 3)
        );
        assert_eq!(disabled_dates(&forward, 2025, 3).len(), 6);
    }

    #[test]
    fn disabled_dates_skip_day_numbers_outside_the_month() {
        let entries = [MonthDay { day: 31, available: false }];
        let disabled = disabled_dates(&entries, 2025, 2);

        assert!(disabled.iter().all(|d| d.month() == 2));
    }

    #[test]
    fn next_appointment_is_none_when_nothing_is_in_the_future() {
        let entries = [
            appointment("a", "2025-03-10T08:00:00"),
            appointment("b", "2025-03-10T10:00:00"),
        ];
        let now = NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        assert!(next_appointment(&entries, now).is_none());
    }

    #[test]
    fn next_appointment_scans_in_fetch_order_not_time_order() {
        let entries = [
            appointment("past", "2025-03-10T09:00:00"),
            appointment("eleven", "2025-03-10T11:00:00"),
            appointment("ten-thirty", "2025-03-10T10:30:00"),
        ];
        let now = NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        // "eleven" comes first in fetch order even though "ten-thirty"
        // starts sooner.
        assert_eq!(next_appointment(&entries, now).map(|a| a.id.as_str()), Some("eleven"));
    }

    #[test]
    fn parse_timestamp_accepts_rfc3339_and_bare_shapes() {
        assert!(parse_timestamp("2025-03-10T09:00:00Z").is_some());
        assert!(parse_timestamp("2025-03-10T09:00:00-03:00").is_some());
        assert!(parse_timestamp("2025-03-10T09:00:00").is_some());
        assert!(parse_timestamp("10/03/2025").is_none());
    }

    #[test]
    fn hour_label_formats_the_timestamp_hour() {
        assert_eq!(hour_label("2025-03-10T09:30:00"), "09:30");
        assert_eq!(hour_label("garbage"), "");
    }
}
