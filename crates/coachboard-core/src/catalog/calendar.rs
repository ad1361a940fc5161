//! Calendar list pages

use super::{option, window, FilterControl, PageSpec, StatCard, Tone};
use crate::models::{Appointment, AppointmentStatus};
use crate::view::{count_where, BulkAction, Column, DateWindow, Dimension, Precision};

/// Appointments (`/calendar/appointments`).
pub fn appointments() -> PageSpec<Appointment> {
    PageSpec {
        title: "Appointments",
        subtitle: "Booked coaching sessions",
        search_placeholder: "Search appointments...",
        dimensions: || {
            vec![
                Dimension::text(
                    "search",
                    vec![
                        |a: &Appointment| Some(a.client_name.as_str()),
                        |a: &Appointment| Some(a.coach.as_str()),
                        |a: &Appointment| a.notes.as_deref(),
                    ],
                ),
                Dimension::category("status", |a: &Appointment| a.status.as_str()),
                Dimension::category("type", |a: &Appointment| a.kind.as_str()),
                Dimension::date("date", |a: &Appointment| Some(a.date.as_str())),
            ]
        },
        controls: &const {
            [
                FilterControl {
                    dimension: "status",
                    all_label: "All Status",
                    options: &[
                        option("Scheduled", "scheduled"),
                        option("Completed", "completed"),
                        option("Cancelled", "cancelled"),
                        option("No-show", "no-show"),
                    ],
                },
                FilterControl {
                    dimension: "type",
                    all_label: "All Types",
                    options: &[
                        option("Consultation", "consultation"),
                        option("Training", "training"),
                        option("Assessment", "assessment"),
                        option("Follow-up", "follow-up"),
                    ],
                },
                FilterControl {
                    dimension: "date",
                    all_label: "All Dates",
                    options: &[
                        window("Today", DateWindow::Today),
                        window("Tomorrow", DateWindow::Tomorrow),
                        window("Next 7 Days", DateWindow::NextSevenDays),
                    ],
                },
            ]
        },
        columns: APPOINTMENT_COLUMNS,
        stats: appointment_stats,
        actions: &[BulkAction::Export, BulkAction::Delete],
    }
}

const APPOINTMENT_COLUMNS: &[Column<Appointment>] = &[
    Column { header: "ID", value: |a| format!("#{}", a.id) },
    Column { header: "Client", value: |a| a.client_name.clone() },
    Column { header: "Date", value: |a| a.date.clone() },
    Column { header: "Time", value: |a| a.time.clone() },
    Column { header: "Duration", value: |a| format!("{} min", a.duration_minutes) },
    Column { header: "Type", value: |a| a.kind.to_string() },
    Column { header: "Coach", value: |a| a.coach.clone() },
    Column { header: "Status", value: |a| a.status.to_string() },
    Column { header: "Notes", value: |a| a.notes.clone().unwrap_or_default() },
];

fn appointment_stats(records: &[Appointment], _precision: Precision) -> Vec<StatCard> {
    vec![
        StatCard::count("Total Appointments", records.len(), "All sessions", Tone::Neutral),
        StatCard::count(
            "Scheduled",
            count_where(records, |a| a.status == AppointmentStatus::Scheduled),
            "Still to run",
            Tone::Info,
        ),
        StatCard::count(
            "Completed",
            count_where(records, |a| a.status == AppointmentStatus::Completed),
            "Sessions held",
            Tone::Success,
        ),
        StatCard::count(
            "Cancelled",
            count_where(records, |a| a.status == AppointmentStatus::Cancelled),
            "Called off",
            Tone::Danger,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::view::FilterValue;

    #[test]
    fn test_type_filter_matches_kind() {
        let store = seed::store();
        let spec = appointments();
        let mut list = spec.list_view(store.appointments());
        list.set_filter("type", FilterValue::Choice("assessment".to_string()));
        assert!(!list.view().is_empty());
        assert!(list
            .view()
            .iter()
            .all(|a| a.kind.as_str() == "assessment"));
    }
}
