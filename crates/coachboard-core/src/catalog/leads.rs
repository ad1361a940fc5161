//! Lead list pages

use super::{format_timestamp, option, FilterControl, PageSpec, StatCard, Tone};
use crate::models::{Lead, LeadResponse, LeadStatus, Referrer, ReferrerStatus};
use crate::view::{count_where, BulkAction, Column, Dimension, Precision};

const STATUS_OPTIONS: &[super::FilterOption] = &[
    option("New", "new"),
    option("Contacted", "contacted"),
    option("Qualified", "qualified"),
    option("Converted", "converted"),
    option("Lost", "lost"),
];

/// Leads (`/leads`).
pub fn all() -> PageSpec<Lead> {
    PageSpec {
        title: "Leads",
        subtitle: "Prospects in the sales pipeline",
        search_placeholder: "Search leads...",
        dimensions: || {
            vec![
                Dimension::text(
                    "search",
                    vec![
                        |l: &Lead| Some(l.name.as_str()),
                        |l: &Lead| Some(l.email.as_str()),
                        |l: &Lead| Some(l.phone.as_str()),
                    ],
                ),
                Dimension::category("status", |l: &Lead| l.status.as_str()),
                Dimension::category("source", |l: &Lead| l.source.as_str()),
            ]
        },
        controls: &const {
            [
                FilterControl { dimension: "status", all_label: "All Status", options: STATUS_OPTIONS },
                FilterControl {
                    dimension: "source",
                    all_label: "All Sources",
                    options: &[
                        option("Website", "website"),
                        option("Referral", "referral"),
                        option("Social", "social"),
                        option("Ads", "ads"),
                        option("Other", "other"),
                    ],
                },
            ]
        },
        columns: LEAD_COLUMNS,
        stats: lead_stats,
        actions: &[BulkAction::Export, BulkAction::Delete],
    }
}

const LEAD_COLUMNS: &[Column<Lead>] = &[
    Column { header: "ID", value: |l| format!("#{}", l.id) },
    Column { header: "Name", value: |l| l.name.clone() },
    Column { header: "Email", value: |l| l.email.clone() },
    Column { header: "Phone", value: |l| l.phone.clone() },
    Column { header: "Status", value: |l| l.status.label().to_string() },
    Column { header: "Source", value: |l| l.source.to_string() },
    Column { header: "Category", value: |l| l.category.clone() },
    Column { header: "Assigned To", value: |l| l.assigned_to.clone().unwrap_or_default() },
    Column { header: "Created", value: |l| l.created_at.clone() },
];

fn lead_stats(records: &[Lead], _precision: Precision) -> Vec<StatCard> {
    vec![
        StatCard::count("Total Leads", records.len(), "In the pipeline", Tone::Neutral),
        StatCard::count(
            "New",
            count_where(records, |l| l.status == LeadStatus::New),
            "Not contacted yet",
            Tone::Info,
        ),
        StatCard::count(
            "Qualified",
            count_where(records, |l| l.status == LeadStatus::Qualified),
            "Ready to close",
            Tone::Warning,
        ),
        StatCard::count(
            "Converted",
            count_where(records, |l| l.status == LeadStatus::Converted),
            "Became clients",
            Tone::Success,
        ),
    ]
}

/// Lead Responses (`/leads/responses`).
pub fn responses() -> PageSpec<LeadResponse> {
    PageSpec {
        title: "Lead Responses",
        subtitle: "Form submissions from prospects",
        search_placeholder: "Search responses...",
        dimensions: || {
            vec![
                Dimension::text(
                    "search",
                    vec![
                        |r: &LeadResponse| Some(r.lead_name.as_str()),
                        |r: &LeadResponse| Some(r.response.as_str()),
                        |r: &LeadResponse| Some(r.lead_email.as_str()),
                    ],
                ),
                Dimension::category("status", |r: &LeadResponse| r.status.as_str()),
                Dimension::category("form", |r: &LeadResponse| r.form_type.as_str()),
                Dimension::category("created-by", |r: &LeadResponse| r.created_by.as_str()),
            ]
        },
        controls: &const {
            [
                FilterControl { dimension: "status", all_label: "All Status", options: STATUS_OPTIONS },
                FilterControl {
                    dimension: "form",
                    all_label: "All Form Types",
                    options: &[
                        option("Contact Form", "Contact Form"),
                        option("App Signup", "App Signup"),
                        option("Promo Form", "Promo Form"),
                    ],
                },
                FilterControl {
                    dimension: "created-by",
                    all_label: "All Channels",
                    options: &[
                        option("Website Form", "Website Form"),
                        option("Mobile App", "Mobile App"),
                        option("Landing Page", "Landing Page"),
                    ],
                },
            ]
        },
        columns: RESPONSE_COLUMNS,
        stats: response_stats,
        actions: &[BulkAction::Export, BulkAction::Delete],
    }
}

const RESPONSE_COLUMNS: &[Column<LeadResponse>] = &[
    Column { header: "ID", value: |r| format!("#{}", r.id) },
    Column { header: "Lead", value: |r| r.lead_name.clone() },
    Column { header: "Response", value: |r| r.response.clone() },
    Column { header: "Form Type", value: |r| r.form_type.clone() },
    Column { header: "Created By", value: |r| r.created_by.clone() },
    Column { header: "Created At", value: |r| format_timestamp(&r.created_at) },
    Column { header: "Status", value: |r| r.status.label().to_string() },
];

fn response_stats(records: &[LeadResponse], _precision: Precision) -> Vec<StatCard> {
    vec![
        StatCard::count("Total Responses", records.len(), "All submissions", Tone::Neutral),
        StatCard::count(
            "New",
            count_where(records, |r| r.status == LeadStatus::New),
            "Unprocessed",
            Tone::Info,
        ),
        StatCard::count(
            "Contacted",
            count_where(records, |r| r.status == LeadStatus::Contacted),
            "Outreach started",
            Tone::Warning,
        ),
        StatCard::count(
            "Converted",
            count_where(records, |r| r.status == LeadStatus::Converted),
            "Became clients",
            Tone::Success,
        ),
    ]
}

/// Lead Referrers (`/leads/referrers`).
pub fn referrers() -> PageSpec<Referrer> {
    PageSpec {
        title: "Lead Referrers",
        subtitle: "Referral codes and how they perform",
        search_placeholder: "Search referrers...",
        dimensions: || {
            vec![
                Dimension::text(
                    "search",
                    vec![
                        |r: &Referrer| Some(r.referrer.as_str()),
                        |r: &Referrer| Some(r.description.as_str()),
                        |r: &Referrer| Some(r.created_by.as_str()),
                    ],
                ),
                Dimension::category("status", |r: &Referrer| r.status.as_str()),
            ]
        },
        controls: &const {
            [FilterControl {
                dimension: "status",
                all_label: "All Status",
                options: &[option("Active", "active"), option("Inactive", "inactive")],
            }]
        },
        columns: REFERRER_COLUMNS,
        stats: referrer_stats,
        actions: &[BulkAction::Export, BulkAction::Deactivate, BulkAction::Delete],
    }
}

const REFERRER_COLUMNS: &[Column<Referrer>] = &[
    Column { header: "ID", value: |r| format!("#{}", r.id) },
    Column { header: "Referrer", value: |r| r.referrer.clone() },
    Column { header: "Created By", value: |r| r.created_by.clone() },
    Column { header: "Created At", value: |r| format_timestamp(&r.created_at) },
    Column { header: "Usage", value: |r| r.usage_count.to_string() },
    Column { header: "Total Leads", value: |r| r.total_leads.to_string() },
    Column { header: "Conversion", value: |r| format!("{:.1}%", r.conversion_rate) },
    Column { header: "Status", value: |r| r.status.to_string() },
    Column { header: "Description", value: |r| r.description.clone() },
];

fn referrer_stats(records: &[Referrer], precision: Precision) -> Vec<StatCard> {
    let total_leads: u64 = records.iter().map(|r| r.total_leads).sum();
    let avg_conversion = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.conversion_rate).sum::<f64>() / records.len() as f64
    };
    vec![
        StatCard::count("Total Referrers", records.len(), "All codes", Tone::Neutral),
        StatCard::count(
            "Active",
            count_where(records, |r| r.status == ReferrerStatus::Active),
            "Currently redeemable",
            Tone::Success,
        ),
        StatCard {
            label: "Total Leads",
            value: total_leads.to_string(),
            detail: "Referred prospects",
            tone: Tone::Info,
        },
        StatCard {
            label: "Avg Conversion",
            value: precision.format(avg_conversion),
            detail: "Across all codes",
            tone: Tone::Warning,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::view::FilterValue;

    #[test]
    fn test_lead_status_filter() {
        let store = seed::store();
        let spec = all();
        let mut list = spec.list_view(store.leads());
        list.set_filter("status", FilterValue::Choice("converted".to_string()));
        let view = list.view();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Robert Taylor");
    }

    #[test]
    fn test_referrer_avg_conversion_empty_store() {
        let cards = referrer_stats(&[], Precision::OneDecimal);
        assert_eq!(cards[3].value, "0.0%");
    }
}
