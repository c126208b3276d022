use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

/// Date, hour-slot and displayed-month selection for the booking dashboard.
///
/// A slot label only means something for the date it was fetched with, so
/// every successful date change clears the hour selection. The machine lives
/// for the whole screen; views mutate it only through these methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    selected_date: NaiveDate,
    selected_hour: Option<String>,
    current_month: (i32, u32),
}

impl Selection {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected_date: today,
            selected_hour: None,
            current_month: (today.year(), today.month()),
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn selected_hour(&self) -> Option<&str> {
        self.selected_hour.as_deref()
    }

    pub fn current_month(&self) -> (i32, u32) {
        self.current_month
    }

    /// Selects `day` unless it is disabled; a disabled day leaves the state
    /// untouched. Success clears the hour selection, also when re-picking the
    /// already selected day.
    pub fn pick_day(&mut self, day: NaiveDate, disabled: &BTreeSet<NaiveDate>) -> bool {
        if disabled.contains(&day) {
            return false;
        }
        self.selected_date = day;
        self.selected_hour = None;
        true
    }

    /// Changes the displayed month. The selected date stays as it is; callers
    /// refetch month availability off the new value.
    pub fn change_month(&mut self, year: i32, month: u32) {
        self.current_month = (year, month);
    }

    /// Selects an hour slot, refusing slots the backend marked unavailable.
    pub fn pick_hour(&mut self, label: &str, available: bool) -> bool {
        if !available {
            return false;
        }
        self.selected_hour = Some(label.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn initial_state_has_no_hour_and_todays_month() {
        let selection = Selection::new(date(2025, 3, 10));

        assert_eq!(selection.selected_date(), date(2025, 3, 10));
        assert_eq!(selection.selected_hour(), None);
        assert_eq!(selection.current_month(), (2025, 3));
    }

    #[test]
    fn picking_a_day_clears_the_hour_selection() {
        let mut selection = Selection::new(date(2025, 3, 10));
        assert!(selection.pick_hour("08:00", true));

        assert!(selection.pick_day(date(2025, 3, 11), &BTreeSet::new()));
        assert_eq!(selection.selected_date(), date(2025, 3, 11));
        assert_eq!(selection.selected_hour(), None);
    }

    #[test]
    fn repicking_the_same_day_still_clears_the_hour() {
        let mut selection = Selection::new(date(2025, 3, 10));
        selection.pick_hour("14:30", true);

        assert!(selection.pick_day(date(2025, 3, 10), &BTreeSet::new()));
        assert_eq!(selection.selected_hour(), None);
    }

    #[test]
    fn picking_a_disabled_day_is_a_no_op() {
        let mut selection = Selection::new(date(2025, 3, 10));
        selection.pick_hour("08:00", true);
        let before = selection.clone();

        let disabled: BTreeSet<NaiveDate> = [date(2025, 3, 16)].into_iter().collect();
        assert!(!selection.pick_day(date(2025, 3, 16), &disabled));
        assert_eq!(selection, before);
    }

    #[test]
    fn changing_month_keeps_the_selected_date() {
        let mut selection = Selection::new(date(2025, 3, 10));

        selection.change_month(2025, 4);
        assert_eq!(selection.current_month(), (2025, 4));
        assert_eq!(selection.selected_date(), date(2025, 3, 10));
    }

    #[test]
    fn picking_an_unavailable_hour_is_a_no_op() {
        let mut selection = Selection::new(date(2025, 3, 10));
        selection.pick_hour("08:00", true);

        assert!(!selection.pick_hour("09:00", false));
        assert_eq!(selection.selected_hour(), Some("08:00"));
    }

    #[test]
    fn picking_an_hour_does_not_reset_anything_else() {
        let mut selection = Selection::new(date(2025, 3, 10));

        assert!(selection.pick_hour("10:30", true));
        assert_eq!(selection.selected_hour(), Some("10:30"));
        assert_eq!(selection.selected_date(), date(2025, 3, 10));
    }
}
