use chrono::{Datelike, Local};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use shared_types::{Appointment, NewAppointment};

use crate::components::appointment_card::AppointmentCard;
use crate::components::booking_form::BookingForm;
use crate::components::error::ErrorView;
use crate::components::header::Header;
use crate::components::loading::LoadingView;
use crate::components::month_calendar::MonthCalendar;
use crate::components::notifications::use_notifier;
use crate::components::slot_grid::SlotGrid;
use crate::schedule::availability::{
    disabled_dates, hour_label, next_appointment, partition_appointments, partition_slots,
};
use crate::schedule::booking::{compose_timestamp, validate, FieldErrors};
use crate::schedule::phone::format_phone;
use crate::schedule::selection::Selection;
use crate::server::{
    create_appointment, get_day_availability, get_month_availability, get_my_appointments,
};

/// Booking dashboard for one provider: pick a day on the calendar, pick an
/// hour slot, fill in name and phone, book.
#[component]
pub fn Dashboard() -> impl IntoView {
    let params = use_params_map();
    let provider_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let selection = RwSignal::new(Selection::new(Local::now().date_naive()));
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::default());
    let submitting = RwSignal::new(false);

    let notifier = use_notifier();

    // Each fetch is keyed on the state slice that parameterizes it, so a
    // superseded response cannot overwrite newer state. The slices are
    // disjoint: month availability, day availability, appointments.
    let month_availability = Resource::new(
        move || (provider_id.get(), selection.read().current_month()),
        |(id, (year, month))| async move {
            if id.is_empty() {
                return Ok(vec![]);
            }
            get_month_availability(id, year, month).await
        },
    );

    let day_availability = Resource::new(
        move || (provider_id.get(), selection.read().selected_date()),
        |(id, date)| async move {
            if id.is_empty() {
                return Ok(vec![]);
            }
            get_day_availability(id, date.year(), date.month(), date.day()).await
        },
    );

    let appointments = Resource::new(
        move || (provider_id.get(), selection.read().selected_date()),
        |(id, date)| async move {
            if id.is_empty() {
                return Ok(vec![]);
            }
            get_my_appointments(id, date.year(), date.month(), date.day()).await
        },
    );

    let disabled_days = Memo::new(move |_| {
        let (year, month) = selection.read().current_month();
        let entries = month_availability
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default();
        disabled_dates(&entries, year, month)
    });

    let is_today =
        Memo::new(move |_| selection.read().selected_date() == Local::now().date_naive());

    let handle_submit = move || {
        let errors = validate(&name.get_untracked(), &phone.get_untracked());
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(FieldErrors::default());

        let (date, hour) = {
            let selection = selection.read_untracked();
            let Some(hour) = selection.selected_hour().map(str::to_string) else {
                return;
            };
            (selection.selected_date(), hour)
        };
        let Some(timestamp) = compose_timestamp(date, &hour) else {
            notifier.error(
                "Could not book the appointment",
                "The selected time could not be understood, please pick it again.",
            );
            return;
        };

        submitting.set(true);
        let request = NewAppointment {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            provider_id: provider_id.get_untracked(),
            date: timestamp,
        };

        spawn_local(async move {
            match create_appointment(request).await {
                Ok(()) => notifier.success(
                    "Appointment booked",
                    "Your appointment was scheduled successfully!",
                ),
                Err(_) => notifier.error(
                    "Could not book the appointment",
                    "Something went wrong while booking, please try again!",
                ),
            }
            submitting.set(false);
            // Success and generic failure both conclude the flow back on the
            // previous screen; only field validation keeps the form open.
            go_back();
        });
    };

    view! {
        <div class="dashboard-screen">
            <Header back_href="/"/>
            <main class="dashboard-content">
                <section class="dashboard-schedule">
                    <h1>"Booked hours"</h1>
                    <p class="date-line">
                        {move || is_today.get().then(|| view! {
                            <span class="date-line-chip">"Today"</span>
                        })}
                        <span>
                            {move || {
                                selection.read().selected_date().format("%B %-d").to_string()
                            }}
                        </span>
                        <span>
                            {move || selection.read().selected_date().format("%A").to_string()}
                        </span>
                    </p>

                    <Suspense fallback=move || view! {
                        <LoadingView message="Loading appointments..."/>
                    }>
                        {move || match appointments.get() {
                            Some(Ok(entries)) => {
                                let up_next = is_today
                                    .get()
                                    .then(|| {
                                        next_appointment(&entries, Local::now().naive_local())
                                            .cloned()
                                    })
                                    .flatten();
                                let periods = partition_appointments(&entries);

                                view! {
                                    {up_next.map(|appointment| view! {
                                        <NextAppointment appointment=appointment/>
                                    })}
                                    <AppointmentSection
                                        title="Morning"
                                        appointments=periods.morning
                                    />
                                    <AppointmentSection
                                        title="Afternoon"
                                        appointments=periods.afternoon
                                    />
                                }.into_any()
                            }
                            Some(Err(e)) => {
                                leptos::logging::error!("Failed to fetch appointments: {}", e);
                                view! {
                                    <ErrorView message="Could not load the appointments for this day."/>
                                }.into_any()
                            }
                            None => view! {
                                <LoadingView message="Loading appointments..."/>
                            }.into_any(),
                        }}
                    </Suspense>
                </section>

                <section class="dashboard-booking">
                    <MonthCalendar selection=selection disabled_days=disabled_days/>

                    <div class="hours-available">
                        <h2>"Pick your time"</h2>
                        <Suspense fallback=move || view! {
                            <LoadingView message="Checking availability..."/>
                        }>
                            {move || match day_availability.get() {
                                Some(Ok(slots)) => {
                                    let periods = partition_slots(&slots);
                                    view! {
                                        <SlotGrid
                                            title="Morning"
                                            slots=periods.morning
                                            selection=selection
                                        />
                                        <SlotGrid
                                            title="Afternoon"
                                            slots=periods.afternoon
                                            selection=selection
                                        />
                                    }.into_any()
                                }
                                Some(Err(e)) => {
                                    leptos::logging::error!(
                                        "Failed to fetch day availability: {}",
                                        e
                                    );
                                    view! {
                                        <ErrorView message="Could not load the time slots for this day."/>
                                    }.into_any()
                                }
                                None => view! {
                                    <LoadingView message="Checking availability..."/>
                                }.into_any(),
                            }}
                        </Suspense>

                        {move || selection.read().selected_hour().is_some().then(|| view! {
                            <BookingForm
                                name=name
                                phone=phone
                                field_errors=field_errors
                                submitting=submitting
                                on_submit=handle_submit
                            />
                        })}
                    </div>
                </section>
            </main>
        </div>
    }
}

#[component]
fn NextAppointment(appointment: Appointment) -> impl IntoView {
    view! {
        <div class="next-appointment">
            <strong>"Up next"</strong>
            <div class="next-appointment-card">
                <img
                    src=appointment.user.avatar_url.clone()
                    alt=appointment.user.name.clone()
                />
                <div>
                    <strong>{appointment.name.clone()}</strong>
                    <p>{format_phone(&appointment.phone)}</p>
                </div>
                <span>
                    <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <circle cx="12" cy="12" r="10"></circle>
                        <polyline points="12 6 12 12 16 14"></polyline>
                    </svg>
                    {hour_label(&appointment.date)}
                </span>
            </div>
        </div>
    }
}

#[component]
fn AppointmentSection(title: &'static str, appointments: Vec<Appointment>) -> impl IntoView {
    view! {
        <section class="appointment-section">
            <strong>{title}</strong>

            {appointments.is_empty().then(|| view! {
                <p class="appointment-section-empty">"No appointments in this period"</p>
            })}

            {appointments
                .into_iter()
                .map(|appointment| view! { <AppointmentCard appointment=appointment/> })
                .collect_view()}
        </section>
    }
}

fn go_back() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.back();
        }
    }
}
