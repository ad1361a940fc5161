//! Check-in list pages

use super::{format_timestamp, option, window, FilterControl, PageSpec, StatCard, Tone};
use crate::models::{CheckIn, CheckInStatus, Priority};
use crate::view::{count_where, BulkAction, Column, DateWindow, Dimension, Precision};

const GROUP_OPTIONS: &[super::FilterOption] = &[
    option("Weight Loss", "Weight Loss"),
    option("Muscle Gain", "Muscle Gain"),
    option("Nutrition", "Nutrition"),
    option("Fitness", "Fitness"),
    option("Rehabilitation", "Rehabilitation"),
];

const LABEL_OPTIONS: &[super::FilterOption] = &[
    option("Positive", "Positive"),
    option("Needs Attention", "Needs Attention"),
    option("Excellent", "Excellent"),
    option("Good", "Good"),
    option("Recovery", "Recovery"),
];

fn search_dimension() -> Dimension<CheckIn> {
    Dimension::text(
        "search",
        vec![
            |c: &CheckIn| Some(c.client_name.as_str()),
            |c: &CheckIn| Some(c.client_mobile.as_str()),
            |c: &CheckIn| Some(c.check_in.as_str()),
            |c: &CheckIn| c.note.as_deref(),
        ],
    )
}

fn group_dimension() -> Dimension<CheckIn> {
    Dimension::category("group", |c: &CheckIn| c.group.as_str())
}

fn label_dimension() -> Dimension<CheckIn> {
    Dimension::category("label", |c: &CheckIn| c.label_str())
}

/// All Check-ins (`/checkins`).
pub fn all() -> PageSpec<CheckIn> {
    PageSpec {
        title: "All Check-ins",
        subtitle: "Every check-in across all lifecycle stages",
        search_placeholder: "Search check-ins...",
        dimensions: || {
            vec![
                search_dimension(),
                Dimension::category("status", |c: &CheckIn| c.status.as_str()),
                group_dimension(),
                label_dimension(),
            ]
        },
        controls: &const {
            [
                FilterControl {
                    dimension: "status",
                    all_label: "All Status",
                    options: &[
                        option("Submitted", "submitted"),
                        option("Pending", "pending"),
                        option("Overdue", "overdue"),
                    ],
                },
                FilterControl { dimension: "group", all_label: "All Groups", options: GROUP_OPTIONS },
                FilterControl { dimension: "label", all_label: "All Labels", options: LABEL_OPTIONS },
            ]
        },
        columns: ALL_COLUMNS,
        stats: all_stats,
        actions: &[BulkAction::Delete, BulkAction::Export],
    }
}

const ALL_COLUMNS: &[Column<CheckIn>] = &[
    Column { header: "ID", value: |c| format!("#{}", c.id) },
    Column { header: "Client", value: |c| c.client_name.clone() },
    Column { header: "Group", value: |c| c.group.clone() },
    Column { header: "Check-in", value: |c| c.check_in.clone() },
    Column { header: "Status", value: |c| c.status.label().to_string() },
    Column { header: "Next Check-in", value: |c| c.next_check_in.clone().unwrap_or_default() },
    Column { header: "Label", value: |c| c.label_str().to_string() },
    Column { header: "Note", value: |c| c.note.clone().unwrap_or_default() },
];

fn all_stats(records: &[CheckIn], _precision: Precision) -> Vec<StatCard> {
    vec![
        StatCard::count("Total Check-ins", records.len(), "All lifecycle stages", Tone::Neutral),
        StatCard::count(
            "Submitted",
            count_where(records, |c| c.status == CheckInStatus::Submitted),
            "Answered by clients",
            Tone::Success,
        ),
        StatCard::count(
            "Pending",
            count_where(records, |c| c.status == CheckInStatus::Pending),
            "Waiting on clients",
            Tone::Warning,
        ),
        StatCard::count(
            "Overdue",
            count_where(records, |c| c.status == CheckInStatus::Overdue),
            "Past due date",
            Tone::Danger,
        ),
    ]
}

/// Quick View (`/checkins/quick`).
pub fn quick_view() -> PageSpec<CheckIn> {
    PageSpec {
        title: "Quick View",
        subtitle: "Pinned check-ins that need a fast decision",
        search_placeholder: "Search quick view...",
        dimensions: || {
            vec![
                search_dimension(),
                Dimension::category("status", |c: &CheckIn| c.status.as_str()),
                Dimension::category("priority", |c: &CheckIn| {
                    c.priority.map(Priority::as_str).unwrap_or("")
                }),
                label_dimension(),
            ]
        },
        controls: &const {
            [
                FilterControl {
                    dimension: "status",
                    all_label: "All Status",
                    options: &[
                        option("Submitted", "submitted"),
                        option("Pending", "pending"),
                    ],
                },
                FilterControl {
                    dimension: "priority",
                    all_label: "All Priorities",
                    options: &[
                        option("High", "high"),
                        option("Medium", "medium"),
                        option("Low", "low"),
                    ],
                },
                FilterControl { dimension: "label", all_label: "All Labels", options: LABEL_OPTIONS },
            ]
        },
        columns: QUICK_COLUMNS,
        stats: quick_stats,
        actions: &[BulkAction::RemoveFromQuickView, BulkAction::Delete, BulkAction::Export],
    }
}

const QUICK_COLUMNS: &[Column<CheckIn>] = &[
    Column { header: "ID", value: |c| format!("#{}", c.id) },
    Column { header: "Client", value: |c| c.client_name.clone() },
    Column { header: "Check-in", value: |c| c.check_in.clone() },
    Column { header: "Status", value: |c| c.status.label().to_string() },
    Column {
        header: "Priority",
        value: |c| c.priority.map(Priority::label).unwrap_or("").to_string(),
    },
    Column { header: "Label", value: |c| c.label_str().to_string() },
];

fn quick_stats(records: &[CheckIn], _precision: Precision) -> Vec<StatCard> {
    vec![
        StatCard::count("Total", records.len(), "In quick view", Tone::Neutral),
        StatCard::count(
            "Submitted",
            count_where(records, |c| c.status == CheckInStatus::Submitted),
            "Ready to review",
            Tone::Success,
        ),
        StatCard::count(
            "Pending",
            count_where(records, |c| c.status == CheckInStatus::Pending),
            "Waiting on clients",
            Tone::Warning,
        ),
        StatCard::count(
            "High Priority",
            count_where(records, |c| c.priority == Some(Priority::High)),
            "Need attention first",
            Tone::Danger,
        ),
    ]
}

/// Submitted Check-ins (`/checkins/submitted`).
pub fn submitted() -> PageSpec<CheckIn> {
    PageSpec {
        title: "Submitted Check-ins",
        subtitle: "Check-ins that have been submitted by clients",
        search_placeholder: "Search submitted check-ins...",
        dimensions: || {
            vec![
                search_dimension(),
                group_dimension(),
                label_dimension(),
                Dimension::flag("cycle", |c: &CheckIn| c.automatic_cycle, "automatic", "manual"),
            ]
        },
        controls: &const {
            [
                FilterControl { dimension: "group", all_label: "All Groups", options: GROUP_OPTIONS },
                FilterControl { dimension: "label", all_label: "All Labels", options: LABEL_OPTIONS },
                FilterControl {
                    dimension: "cycle",
                    all_label: "All Cycles",
                    options: &[option("Automatic", "automatic"), option("Manual", "manual")],
                },
            ]
        },
        columns: SUBMITTED_COLUMNS,
        stats: submitted_stats,
        actions: &[
            BulkAction::Accept,
            BulkAction::AddNote,
            BulkAction::AddLabel,
            BulkAction::StopCycle,
            BulkAction::Delete,
        ],
    }
}

const SUBMITTED_COLUMNS: &[Column<CheckIn>] = &[
    Column { header: "ID", value: |c| format!("#{}", c.id) },
    Column { header: "Client", value: |c| c.client_name.clone() },
    Column { header: "Client Mobile", value: |c| c.client_mobile.clone() },
    Column { header: "Group", value: |c| c.group.clone() },
    Column { header: "Subscription", value: |c| c.subscription.clone() },
    Column { header: "Check-in", value: |c| c.check_in.clone() },
    Column { header: "Next Check-in", value: |c| c.next_check_in.clone().unwrap_or_default() },
    Column { header: "Program Report", value: |c| c.program_report.clone().unwrap_or_default() },
    Column {
        header: "Submitted At",
        value: |c| c.submitted_at.as_deref().map(format_timestamp).unwrap_or_default(),
    },
    Column { header: "Note", value: |c| c.note.clone().unwrap_or_default() },
    Column { header: "Label", value: |c| c.label_str().to_string() },
];

fn submitted_stats(records: &[CheckIn], _precision: Precision) -> Vec<StatCard> {
    let positive = count_where(records, |c| {
        matches!(c.label_str(), "Positive" | "Excellent" | "Good")
    });
    vec![
        StatCard::count("Total Submitted", records.len(), "All submitted check-ins", Tone::Neutral),
        StatCard::count(
            "Automatic Cycle",
            count_where(records, |c| c.automatic_cycle),
            "Auto-scheduled",
            Tone::Info,
        ),
        StatCard::count(
            "Manual",
            count_where(records, |c| !c.automatic_cycle),
            "Manually scheduled",
            Tone::Warning,
        ),
        StatCard::count("Positive", positive, "Good progress", Tone::Success),
        StatCard::count(
            "Needs Attention",
            count_where(records, |c| c.label_str() == "Needs Attention"),
            "Require follow-up",
            Tone::Danger,
        ),
    ]
}

/// Upcoming Check-ins (`/checkins/upcoming`).
pub fn upcoming() -> PageSpec<CheckIn> {
    PageSpec {
        title: "Upcoming Check-ins",
        subtitle: "Scheduled check-ins waiting to be sent",
        search_placeholder: "Search upcoming check-ins...",
        dimensions: || {
            vec![
                search_dimension(),
                group_dimension(),
                Dimension::date("scheduled", |c: &CheckIn| c.scheduled_for.as_deref()),
            ]
        },
        controls: &const {
            [
                FilterControl { dimension: "group", all_label: "All Groups", options: GROUP_OPTIONS },
                FilterControl {
                    dimension: "scheduled",
                    all_label: "All Dates",
                    options: &[
                        window("Today", DateWindow::Today),
                        window("Tomorrow", DateWindow::Tomorrow),
                        window("Next 7 Days", DateWindow::NextSevenDays),
                    ],
                },
            ]
        },
        columns: UPCOMING_COLUMNS,
        stats: upcoming_stats,
        actions: &[BulkAction::Send, BulkAction::Delete, BulkAction::Export],
    }
}

const UPCOMING_COLUMNS: &[Column<CheckIn>] = &[
    Column { header: "ID", value: |c| format!("#{}", c.id) },
    Column { header: "Client", value: |c| c.client_name.clone() },
    Column { header: "Group", value: |c| c.group.clone() },
    Column { header: "Check-in", value: |c| c.check_in.clone() },
    Column {
        header: "Scheduled For",
        value: |c| c.scheduled_for.as_deref().map(format_timestamp).unwrap_or_default(),
    },
    Column { header: "Assigned By", value: |c| c.assigned_by.clone().unwrap_or_default() },
    Column { header: "Team Note", value: |c| c.team_note.clone().unwrap_or_default() },
];

fn upcoming_stats(records: &[CheckIn], _precision: Precision) -> Vec<StatCard> {
    let today = chrono::Local::now().date_naive();
    let in_window = |c: &CheckIn, w: DateWindow| {
        c.scheduled_for
            .as_deref()
            .and_then(crate::view::filter::parse_record_date)
            .is_some_and(|d| w.contains(d, today))
    };
    vec![
        StatCard::count("Total Upcoming", records.len(), "Scheduled check-ins", Tone::Neutral),
        StatCard::count(
            "Today",
            count_where(records, |c| in_window(c, DateWindow::Today)),
            "Going out today",
            Tone::Info,
        ),
        StatCard::count(
            "Tomorrow",
            count_where(records, |c| in_window(c, DateWindow::Tomorrow)),
            "Going out tomorrow",
            Tone::Info,
        ),
        StatCard::count(
            "This Week",
            count_where(records, |c| in_window(c, DateWindow::NextSevenDays)),
            "Within 7 days",
            Tone::Success,
        ),
    ]
}

/// Unsubmitted Check-ins (`/checkins/unsubmitted`).
pub fn unsubmitted() -> PageSpec<CheckIn> {
    PageSpec {
        title: "Unsubmitted Check-ins",
        subtitle: "Sent to clients but not answered yet",
        search_placeholder: "Search unsubmitted check-ins...",
        dimensions: || {
            vec![
                search_dimension(),
                group_dimension(),
                Dimension::date("sent", |c: &CheckIn| c.send_at.as_deref()),
            ]
        },
        controls: &const {
            [
                FilterControl { dimension: "group", all_label: "All Groups", options: GROUP_OPTIONS },
                FilterControl {
                    dimension: "sent",
                    all_label: "All Dates",
                    options: &[
                        window("Today", DateWindow::Today),
                        window("Yesterday", DateWindow::Yesterday),
                        window("Past 7 Days", DateWindow::PastSevenDays),
                    ],
                },
            ]
        },
        columns: UNSUBMITTED_COLUMNS,
        stats: unsubmitted_stats,
        actions: &[BulkAction::Resend, BulkAction::Delete, BulkAction::Export],
    }
}

const UNSUBMITTED_COLUMNS: &[Column<CheckIn>] = &[
    Column { header: "ID", value: |c| format!("#{}", c.id) },
    Column { header: "Check-in", value: |c| c.check_in.clone() },
    Column { header: "Client", value: |c| c.client_name.clone() },
    Column { header: "By", value: |c| c.assigned_by.clone().unwrap_or_default() },
    Column { header: "Client Phone", value: |c| c.client_mobile.clone() },
    Column { header: "Group", value: |c| c.group.clone() },
    Column { header: "Team Note", value: |c| c.team_note.clone().unwrap_or_default() },
    Column {
        header: "Sent At",
        value: |c| c.send_at.as_deref().map(format_timestamp).unwrap_or_default(),
    },
];

fn unsubmitted_stats(records: &[CheckIn], _precision: Precision) -> Vec<StatCard> {
    let today = chrono::Local::now().date_naive();
    let in_window = |c: &CheckIn, w: DateWindow| {
        c.send_at
            .as_deref()
            .and_then(crate::view::filter::parse_record_date)
            .is_some_and(|d| w.contains(d, today))
    };
    vec![
        StatCard::count("Total Unsubmitted", records.len(), "Awaiting answers", Tone::Neutral),
        StatCard::count(
            "Sent Today",
            count_where(records, |c| in_window(c, DateWindow::Today)),
            "Fresh sends",
            Tone::Info,
        ),
        StatCard::count(
            "Sent Yesterday",
            count_where(records, |c| in_window(c, DateWindow::Yesterday)),
            "One day out",
            Tone::Warning,
        ),
        StatCard::count(
            "This Week",
            count_where(records, |c| in_window(c, DateWindow::PastSevenDays)),
            "Within 7 days",
            Tone::Success,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::view::FilterValue;

    #[test]
    fn test_submitted_page_filters_and_stats() {
        let store = seed::store();
        let spec = submitted();
        let mut list = spec.list_view(store.submitted_checkins());

        let cards = (spec.stats)(list.records(), Precision::Whole);
        assert_eq!(cards[0].value, store.submitted_checkins().len().to_string());

        list.set_filter("cycle", FilterValue::Choice("manual".to_string()));
        let view = list.view();
        assert!(view.iter().all(|c| !c.automatic_cycle));
    }

    #[test]
    fn test_all_page_status_filter_preserves_order() {
        let store = seed::store();
        let spec = all();
        let mut list = spec.list_view(store.checkins());
        list.set_filter("status", FilterValue::Choice("submitted".to_string()));
        let view = list.view();
        let ids: Vec<&str> = view.iter().map(|c| c.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort_by_key(|id| id.parse::<u32>().unwrap());
        assert_eq!(ids, sorted);
    }
}
