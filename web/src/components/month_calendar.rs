use std::collections::BTreeSet;

use chrono::{Datelike, Local, NaiveDate};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

use crate::schedule::selection::Selection;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month calendar for the booking dashboard. Disabled days (backend plus
/// Sundays) are not clickable, and month navigation never goes below the
/// month of the local today.
#[component]
pub fn MonthCalendar(
    selection: RwSignal<Selection>,
    disabled_days: Memo<BTreeSet<NaiveDate>>,
) -> impl IntoView {
    let navigate_month = move |direction: i32| {
        let (year, month) = selection.read_untracked().current_month();
        let mut year = year;
        let mut month = month as i32 + direction;

        if month > 12 {
            month = 1;
            year += 1;
        } else if month < 1 {
            month = 12;
            year -= 1;
        }

        selection.update(|s| s.change_month(year, month as u32));
    };

    let at_first_month = Memo::new(move |_| {
        let today = Local::now().date_naive();
        selection.read().current_month() <= (today.year(), today.month())
    });

    view! {
        <div class="month-calendar">
            <div class="month-calendar-header">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    disabled=Signal::from(at_first_month)
                    on_click=move |_| navigate_month(-1)
                >
                    "←"
                </Button>

                <div class="month-calendar-label">
                    {move || {
                        let (year, month) = selection.read().current_month();
                        format!("{} {}", MONTH_NAMES[(month - 1) as usize], year)
                    }}
                </div>

                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| navigate_month(1)
                >
                    "→"
                </Button>
            </div>

            <div class="month-calendar-weekdays">
                <div class="month-calendar-weekday">"Sun"</div>
                <div class="month-calendar-weekday">"Mon"</div>
                <div class="month-calendar-weekday">"Tue"</div>
                <div class="month-calendar-weekday">"Wed"</div>
                <div class="month-calendar-weekday">"Thu"</div>
                <div class="month-calendar-weekday">"Fri"</div>
                <div class="month-calendar-weekday">"Sat"</div>
            </div>

            <div class="month-calendar-days">
                {move || {
                    let (year, month) = selection.read().current_month();
                    let disabled = disabled_days.get();
                    let selected = selection.read().selected_date();

                    let mut cells = Vec::new();

                    // Blank cells before the first of the month keep the
                    // weekday columns aligned.
                    for _ in 0..first_weekday(year, month) {
                        cells.push(view! {
                            <div class="month-calendar-day empty"></div>
                        }.into_any());
                    }

                    for day in 1..=days_in_month(year, month) {
                        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                            continue;
                        };
                        let is_disabled = disabled.contains(&date);
                        let is_selected = selected == date;

                        cells.push(view! {
                            <button
                                class="month-calendar-day"
                                class:unavailable=is_disabled
                                class:selected=is_selected
                                disabled=is_disabled
                                on:click=move |_| {
                                    selection.update(|s| {
                                        s.pick_day(date, &disabled_days.get_untracked());
                                    });
                                }
                            >
                                {day}
                            </button>
                        }.into_any());
                    }

                    cells
                }}
            </div>
        </div>
    }
}

// Date helpers for laying out the grid.

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{days_in_month, first_weekday};

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn first_weekday_is_sunday_indexed() {
        // March 2025 starts on a Saturday, June 2025 on a Sunday.
        assert_eq!(first_weekday(2025, 3), 6);
        assert_eq!(first_weekday(2025, 6), 0);
    }
}
