//! Reminder list pages

use super::{format_timestamp, option, FilterControl, PageSpec, StatCard, Tone};
use crate::models::{Reminder, ReminderStatus, ReminderType};
use crate::view::{count_where, BulkAction, Column, Dimension, Precision};

/// All Reminders (`/reminders`).
pub fn all() -> PageSpec<Reminder> {
    PageSpec {
        title: "All Reminders",
        subtitle: "Scheduled client reminders",
        search_placeholder: "Search reminders...",
        dimensions: || {
            vec![
                Dimension::text(
                    "search",
                    vec![
                        |r: &Reminder| Some(r.reminder.as_str()),
                        |r: &Reminder| Some(r.client.as_str()),
                        |r: &Reminder| Some(r.assigned_to.as_str()),
                    ],
                ),
                Dimension::category("group", |r: &Reminder| r.group.as_str()),
                Dimension::category("status", |r: &Reminder| r.status.as_str()),
                Dimension::category("schedule", |r: &Reminder| r.schedule_type.as_str()),
            ]
        },
        controls: &const {
            [
                FilterControl {
                    dimension: "group",
                    all_label: "All Groups",
                    options: &[
                        option("Weight Loss", "Weight Loss"),
                        option("Muscle Gain", "Muscle Gain"),
                        option("Nutrition", "Nutrition"),
                        option("Fitness", "Fitness"),
                        option("Group Classes", "Group Classes"),
                    ],
                },
                FilterControl {
                    dimension: "status",
                    all_label: "All Status",
                    options: &[
                        option("Active", "active"),
                        option("Paused", "paused"),
                        option("Completed", "completed"),
                    ],
                },
                FilterControl {
                    dimension: "schedule",
                    all_label: "All Schedules",
                    options: &[
                        option("Daily", "Daily"),
                        option("Weekly", "Weekly"),
                        option("Bi-weekly", "Bi-weekly"),
                        option("Monthly", "Monthly"),
                        option("One-time", "One-time"),
                    ],
                },
            ]
        },
        columns: REMINDER_COLUMNS,
        stats: reminder_stats,
        actions: &[
            BulkAction::Pause,
            BulkAction::Activate,
            BulkAction::Delete,
            BulkAction::Export,
        ],
    }
}

const REMINDER_COLUMNS: &[Column<Reminder>] = &[
    Column { header: "ID", value: |r| format!("#{}", r.id) },
    Column { header: "Reminder", value: |r| r.reminder.clone() },
    Column { header: "Client", value: |r| r.client.clone() },
    Column { header: "Client Phone", value: |r| r.client_phone.clone() },
    Column { header: "Group", value: |r| r.group.clone() },
    Column { header: "Schedule", value: |r| r.schedule_type.clone() },
    Column { header: "Next Fire", value: |r| format_timestamp(&r.schedule_date) },
    Column { header: "Assigned To", value: |r| r.assigned_to.clone() },
    Column { header: "Status", value: |r| r.status.label().to_string() },
];

fn reminder_stats(records: &[Reminder], _precision: Precision) -> Vec<StatCard> {
    vec![
        StatCard::count("Total Reminders", records.len(), "All schedules", Tone::Neutral),
        StatCard::count(
            "Active",
            count_where(records, |r| r.status == ReminderStatus::Active),
            "Firing on schedule",
            Tone::Success,
        ),
        StatCard::count(
            "Paused",
            count_where(records, |r| r.status == ReminderStatus::Paused),
            "Temporarily stopped",
            Tone::Warning,
        ),
        StatCard::count(
            "Completed",
            count_where(records, |r| r.status == ReminderStatus::Completed),
            "Ran to completion",
            Tone::Info,
        ),
    ]
}

/// Reminder Types (`/reminders/types`).
pub fn types() -> PageSpec<ReminderType> {
    PageSpec {
        title: "Reminder Types",
        subtitle: "Reusable reminder templates",
        search_placeholder: "Search reminder types...",
        dimensions: || {
            vec![
                Dimension::text(
                    "search",
                    vec![
                        |t: &ReminderType| Some(t.name.as_str()),
                        |t: &ReminderType| Some(t.description.as_str()),
                    ],
                ),
                Dimension::category("category", |t: &ReminderType| t.category.as_str()),
                Dimension::flag("active", |t: &ReminderType| t.is_active, "active", "inactive"),
            ]
        },
        controls: &const {
            [
                FilterControl {
                    dimension: "category",
                    all_label: "All Categories",
                    options: &[
                        option("Warning", "warning"),
                        option("Success", "success"),
                        option("Info", "info"),
                        option("Error", "error"),
                        option("Timeout", "timeout"),
                        option("Custom", "custom"),
                    ],
                },
                FilterControl {
                    dimension: "active",
                    all_label: "All Status",
                    options: &[option("Active", "active"), option("Inactive", "inactive")],
                },
            ]
        },
        columns: TYPE_COLUMNS,
        stats: type_stats,
        actions: &[
            BulkAction::Activate,
            BulkAction::Deactivate,
            BulkAction::Delete,
            BulkAction::Export,
        ],
    }
}

const TYPE_COLUMNS: &[Column<ReminderType>] = &[
    Column { header: "ID", value: |t| format!("#{}", t.id) },
    Column { header: "Icon", value: |t| t.icon.clone() },
    Column { header: "Name", value: |t| t.name.clone() },
    Column { header: "Description", value: |t| t.description.clone() },
    Column { header: "Category", value: |t| t.category.to_string() },
    Column { header: "Usage", value: |t| t.usage_count.to_string() },
    Column {
        header: "Active",
        value: |t| if t.is_active { "yes" } else { "no" }.to_string(),
    },
    Column { header: "Updated", value: |t| t.updated_at.clone() },
];

fn type_stats(records: &[ReminderType], _precision: Precision) -> Vec<StatCard> {
    let total_usage: u64 = records.iter().map(|t| t.usage_count).sum();
    vec![
        StatCard::count("Total Types", records.len(), "Defined templates", Tone::Neutral),
        StatCard::count(
            "Active",
            count_where(records, |t| t.is_active),
            "Available for use",
            Tone::Success,
        ),
        StatCard::count(
            "Inactive",
            count_where(records, |t| !t.is_active),
            "Disabled templates",
            Tone::Warning,
        ),
        StatCard {
            label: "Total Usage",
            value: total_usage.to_string(),
            detail: "Reminders sent",
            tone: Tone::Info,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::view::FilterValue;

    #[test]
    fn test_reminder_schedule_filter() {
        let store = seed::store();
        let spec = all();
        let mut list = spec.list_view(store.reminders());
        list.set_filter("schedule", FilterValue::Choice("Monthly".to_string()));
        assert!(list.view().iter().all(|r| r.schedule_type == "Monthly"));
        assert!(!list.view().is_empty());
    }

    #[test]
    fn test_type_active_flag_filter() {
        let store = seed::store();
        let spec = types();
        let mut list = spec.list_view(store.reminder_types());
        list.set_filter("active", FilterValue::Choice("inactive".to_string()));
        let view = list.view();
        assert!(view.iter().all(|t| !t.is_active));
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_type_stats_usage_sum() {
        let store = seed::store();
        let cards = type_stats(store.reminder_types(), Precision::Whole);
        let expected: u64 = store.reminder_types().iter().map(|t| t.usage_count).sum();
        assert_eq!(cards[3].value, expected.to_string());
    }
}
