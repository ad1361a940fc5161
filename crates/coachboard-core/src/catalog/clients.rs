//! Client list pages

use super::{option, FilterControl, PageSpec, StatCard, Tone};
use crate::models::{Client, ClientStatus, FollowUp, FollowUpStatus, Priority};
use crate::view::{count_where, BulkAction, Column, Dimension, Precision};

/// All Clients (`/clients`).
pub fn all() -> PageSpec<Client> {
    PageSpec {
        title: "All Clients",
        subtitle: "Every client on the roster",
        search_placeholder: "Search clients...",
        dimensions: || {
            vec![
                Dimension::text(
                    "search",
                    vec![
                        |c: &Client| Some(c.name.as_str()),
                        |c: &Client| Some(c.email.as_str()),
                        |c: &Client| Some(c.phone.as_str()),
                    ],
                ),
                Dimension::category("status", |c: &Client| c.status.as_str()),
            ]
        },
        controls: &const {
            [FilterControl {
                dimension: "status",
                all_label: "All Status",
                options: &[
                    option("Active", "active"),
                    option("Pending", "pending"),
                    option("On Hold", "on-hold"),
                    option("Pre-start", "prestart"),
                    option("Expired", "expired"),
                    option("Refunded", "refunded"),
                    option("No Subscription", "no-subscription"),
                ],
            }]
        },
        columns: CLIENT_COLUMNS,
        stats: client_stats,
        actions: &[BulkAction::Export, BulkAction::Delete],
    }
}

const CLIENT_COLUMNS: &[Column<Client>] = &[
    Column { header: "ID", value: |c| format!("#{}", c.id) },
    Column { header: "Name", value: |c| c.name.clone() },
    Column { header: "Email", value: |c| c.email.clone() },
    Column { header: "Phone", value: |c| c.phone.clone() },
    Column { header: "Status", value: |c| c.status.label().to_string() },
    Column { header: "Joined", value: |c| c.join_date.clone() },
    Column { header: "Program", value: |c| c.program.clone().unwrap_or_default() },
];

fn client_stats(records: &[Client], precision: Precision) -> Vec<StatCard> {
    let active = count_where(records, |c| c.status == ClientStatus::Active);
    let share = crate::view::percentage(active, records.len());
    vec![
        StatCard::count("Total Clients", records.len(), "On the roster", Tone::Neutral),
        StatCard {
            label: "Active",
            value: format!("{} ({})", active, precision.format(share)),
            detail: "With a running subscription",
            tone: Tone::Success,
        },
        StatCard::count(
            "Pending",
            count_where(records, |c| c.status == ClientStatus::Pending),
            "Awaiting onboarding",
            Tone::Warning,
        ),
        StatCard::count(
            "Expired",
            count_where(records, |c| c.status == ClientStatus::Expired),
            "Subscription lapsed",
            Tone::Danger,
        ),
    ]
}

/// Follow up (`/clients/followup`).
pub fn follow_ups() -> PageSpec<FollowUp> {
    PageSpec {
        title: "Follow up",
        subtitle: "Open client work assigned to the team",
        search_placeholder: "Search follow-ups...",
        dimensions: || {
            vec![
                Dimension::text(
                    "search",
                    vec![
                        |f: &FollowUp| Some(f.client_name.as_str()),
                        |f: &FollowUp| Some(f.description.as_str()),
                        |f: &FollowUp| Some(f.assigned_to.as_str()),
                    ],
                ),
                Dimension::category("status", |f: &FollowUp| f.status.as_str()),
                Dimension::category("priority", |f: &FollowUp| f.priority.as_str()),
                Dimension::category("kind", |f: &FollowUp| f.kind.as_str()),
            ]
        },
        controls: &const {
            [
                FilterControl {
                    dimension: "status",
                    all_label: "All Status",
                    options: &[
                        option("Pending", "pending"),
                        option("Completed", "completed"),
                        option("Overdue", "overdue"),
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
                FilterControl {
                    dimension: "kind",
                    all_label: "All Types",
                    options: &[
                        option("Check-in", "check-in"),
                        option("Assessment", "assessment"),
                        option("Payment", "payment"),
                        option("Program Update", "program-update"),
                        option("Other", "other"),
                    ],
                },
            ]
        },
        columns: FOLLOWUP_COLUMNS,
        stats: followup_stats,
        actions: &[BulkAction::Export, BulkAction::Delete],
    }
}

const FOLLOWUP_COLUMNS: &[Column<FollowUp>] = &[
    Column { header: "ID", value: |f| format!("#{}", f.id) },
    Column { header: "Client", value: |f| f.client_name.clone() },
    Column { header: "Type", value: |f| f.kind.to_string() },
    Column { header: "Priority", value: |f| f.priority.label().to_string() },
    Column { header: "Due", value: |f| f.due_date.clone() },
    Column { header: "Status", value: |f| f.status.to_string() },
    Column { header: "Description", value: |f| f.description.clone() },
    Column { header: "Assigned To", value: |f| f.assigned_to.clone() },
];

fn followup_stats(records: &[FollowUp], _precision: Precision) -> Vec<StatCard> {
    vec![
        StatCard::count("Total Follow-ups", records.len(), "All open work", Tone::Neutral),
        StatCard::count(
            "Pending",
            count_where(records, |f| f.status == FollowUpStatus::Pending),
            "Not started",
            Tone::Warning,
        ),
        StatCard::count(
            "Overdue",
            count_where(records, |f| f.status == FollowUpStatus::Overdue),
            "Past due date",
            Tone::Danger,
        ),
        StatCard::count(
            "High Priority",
            count_where(records, |f| f.priority == Priority::High),
            "Do these first",
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
    fn test_client_search_matches_email() {
        let store = seed::store();
        let spec = all();
        let mut list = spec.list_view(store.clients());
        list.set_filter("search", FilterValue::Text("mike.chen@".to_string()));
        let view = list.view();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Mike Chen");
    }

    #[test]
    fn test_followup_priority_filter() {
        let store = seed::store();
        let spec = follow_ups();
        let mut list = spec.list_view(store.follow_ups());
        list.set_filter("priority", FilterValue::Choice("high".to_string()));
        assert!(list.view().iter().all(|f| f.priority == Priority::High));
    }
}
