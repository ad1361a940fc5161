//! Client app request pages (workout and diet)

use super::{format_timestamp, option, FilterControl, PageSpec, StatCard, Tone};
use crate::models::{AppRequest, RequestStatus};
use crate::view::{count_where, BulkAction, Column, Dimension, Precision};

const STATUS_CONTROL: FilterControl = FilterControl {
    dimension: "status",
    all_label: "All Status",
    options: &[
        option("Pending", "pending"),
        option("Approved", "approved"),
        option("Rejected", "rejected"),
    ],
};

const READ_CONTROL: FilterControl = FilterControl {
    dimension: "read",
    all_label: "All",
    options: &[option("Read", "read"), option("Unread", "unread")],
};

fn dimensions() -> Vec<Dimension<AppRequest>> {
    vec![
        Dimension::text(
            "search",
            vec![
                |r: &AppRequest| Some(r.client.as_str()),
                |r: &AppRequest| Some(r.reason.as_str()),
                |r: &AppRequest| r.exercise.as_deref(),
                |r: &AppRequest| r.recipe.as_deref(),
            ],
        ),
        Dimension::category("status", |r: &AppRequest| r.status.as_str()),
        Dimension::flag("read", |r: &AppRequest| r.mark_as_read, "read", "unread"),
    ]
}

fn request_stats(records: &[AppRequest], _precision: Precision) -> Vec<StatCard> {
    vec![
        StatCard::count("Total Requests", records.len(), "From the client app", Tone::Neutral),
        StatCard::count(
            "Pending",
            count_where(records, |r| r.status == RequestStatus::Pending),
            "Awaiting a decision",
            Tone::Warning,
        ),
        StatCard::count(
            "Approved",
            count_where(records, |r| r.status == RequestStatus::Approved),
            "Changes accepted",
            Tone::Success,
        ),
        StatCard::count(
            "Rejected",
            count_where(records, |r| r.status == RequestStatus::Rejected),
            "Changes declined",
            Tone::Danger,
        ),
        StatCard::count(
            "Unread",
            count_where(records, |r| !r.mark_as_read),
            "Not yet seen",
            Tone::Info,
        ),
    ]
}

const ACTIONS: &[BulkAction] = &[
    BulkAction::Approve,
    BulkAction::Reject,
    BulkAction::MarkRead,
    BulkAction::Delete,
];

/// Workout Requests (`/requests/workout`).
pub fn workout() -> PageSpec<AppRequest> {
    PageSpec {
        title: "Workout Requests",
        subtitle: "Exercise change requests from the client app",
        search_placeholder: "Search workout requests...",
        dimensions,
        controls: &[STATUS_CONTROL, READ_CONTROL],
        columns: WORKOUT_COLUMNS,
        stats: request_stats,
        actions: ACTIONS,
    }
}

const WORKOUT_COLUMNS: &[Column<AppRequest>] = &[
    Column { header: "ID", value: |r| format!("#{}", r.id) },
    Column { header: "Exercise", value: |r| r.exercise.clone().unwrap_or_default() },
    Column { header: "Client", value: |r| r.client.clone() },
    Column { header: "Group", value: |r| r.group.clone() },
    Column { header: "Workout", value: |r| r.workout.clone().unwrap_or_default() },
    Column { header: "Reason", value: |r| r.reason.clone() },
    Column { header: "Since", value: |r| format_timestamp(&r.since) },
    Column {
        header: "Read",
        value: |r| if r.mark_as_read { "yes" } else { "no" }.to_string(),
    },
    Column { header: "Status", value: |r| r.status.label().to_string() },
];

/// Diet Requests (`/requests/diet`).
pub fn diet() -> PageSpec<AppRequest> {
    PageSpec {
        title: "Diet Requests",
        subtitle: "Meal change requests from the client app",
        search_placeholder: "Search diet requests...",
        dimensions,
        controls: &[STATUS_CONTROL, READ_CONTROL],
        columns: DIET_COLUMNS,
        stats: request_stats,
        actions: ACTIONS,
    }
}

const DIET_COLUMNS: &[Column<AppRequest>] = &[
    Column { header: "ID", value: |r| format!("#{}", r.id) },
    Column { header: "Client", value: |r| r.client.clone() },
    Column { header: "Group", value: |r| r.group.clone() },
    Column { header: "Diet", value: |r| r.diet.clone().unwrap_or_default() },
    Column { header: "Meal", value: |r| r.meal.clone().unwrap_or_default() },
    Column { header: "Recipe", value: |r| r.recipe.clone().unwrap_or_default() },
    Column { header: "Reason", value: |r| r.reason.clone() },
    Column { header: "Since", value: |r| format_timestamp(&r.since) },
    Column {
        header: "Read",
        value: |r| if r.mark_as_read { "yes" } else { "no" }.to_string(),
    },
    Column { header: "Status", value: |r| r.status.label().to_string() },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::view::FilterValue;

    #[test]
    fn test_unread_flag_filter() {
        let store = seed::store();
        let spec = workout();
        let mut list = spec.list_view(store.workout_requests());
        list.set_filter("read", FilterValue::Choice("unread".to_string()));
        assert!(list.view().iter().all(|r| !r.mark_as_read));
    }

    #[test]
    fn test_stats_cover_status_and_read() {
        let store = seed::store();
        let cards = request_stats(store.diet_requests(), Precision::Whole);
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].value, store.diet_requests().len().to_string());
    }
}
