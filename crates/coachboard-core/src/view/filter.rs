//! Filter dimensions and predicate evaluation for list views
//!
//! Every list page declares a set of named dimensions (search text, status,
//! group, schedule, date window, ...) reading record attributes through plain
//! accessor functions. A record is part of the derived view iff all active
//! dimensions match (logical AND). Absent dimensions and the `All` sentinel
//! are unconstrained.

use chrono::{DateTime, Duration, NaiveDate};
use std::collections::HashMap;
use tracing::warn;

/// Accessor for an optional string attribute of a record.
pub type TextGetter<R> = fn(&R) -> Option<&str>;

/// How a dimension reads and compares a record attribute.
pub enum DimensionKind<R> {
    /// Case-insensitive substring match, OR across the configured fields.
    /// An empty query matches everything.
    Text { fields: Vec<TextGetter<R>> },

    /// Exact equality against a categorical attribute (status, group, label).
    Category { field: fn(&R) -> &str },

    /// Boolean attribute exposed through two choice labels,
    /// e.g. `automatic` / `manual` or `read` / `unread`.
    Flag {
        field: fn(&R) -> bool,
        on: &'static str,
        off: &'static str,
    },

    /// Timestamp attribute (ISO-8601 string) tested against a named window.
    /// Malformed or missing values never match an active window.
    Date { field: TextGetter<R> },
}

/// A named filter dimension on record type `R`.
pub struct Dimension<R> {
    pub name: &'static str,
    pub kind: DimensionKind<R>,
}

impl<R> Dimension<R> {
    pub fn text(name: &'static str, fields: Vec<TextGetter<R>>) -> Self {
        Self {
            name,
            kind: DimensionKind::Text { fields },
        }
    }

    pub fn category(name: &'static str, field: fn(&R) -> &str) -> Self {
        Self {
            name,
            kind: DimensionKind::Category { field },
        }
    }

    pub fn flag(
        name: &'static str,
        field: fn(&R) -> bool,
        on: &'static str,
        off: &'static str,
    ) -> Self {
        Self {
            name,
            kind: DimensionKind::Flag { field, on, off },
        }
    }

    pub fn date(name: &'static str, field: TextGetter<R>) -> Self {
        Self {
            name,
            kind: DimensionKind::Date { field },
        }
    }

    fn matches(&self, record: &R, value: &FilterValue, today: NaiveDate) -> bool {
        match (&self.kind, value) {
            (_, FilterValue::All) => true,
            (DimensionKind::Text { fields }, FilterValue::Text(query)) => {
                if query.is_empty() {
                    return true;
                }
                let needle = query.to_lowercase();
                fields
                    .iter()
                    .any(|field| field(record).is_some_and(|s| s.to_lowercase().contains(&needle)))
            }
            (DimensionKind::Category { field }, FilterValue::Choice(choice)) => {
                field(record) == choice
            }
            (DimensionKind::Flag { field, on, off }, FilterValue::Choice(choice)) => {
                if choice == on {
                    field(record)
                } else if choice == off {
                    !field(record)
                } else {
                    true
                }
            }
            (DimensionKind::Date { field }, FilterValue::Window(window)) => field(record)
                .and_then(parse_record_date)
                .is_some_and(|date| window.contains(date, today)),
            // Value kind does not fit the dimension kind: treat as unconstrained
            // rather than filtering everything out.
            _ => true,
        }
    }
}

/// Current value of one filter dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterValue {
    /// Unconstrained sentinel (the `"all"` option of the original selects).
    #[default]
    All,
    /// Free-text search query.
    Text(String),
    /// Selected categorical / flag choice.
    Choice(String),
    /// Selected date window.
    Window(DateWindow),
}

impl FilterValue {
    pub fn is_all(&self) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Text(q) => q.is_empty(),
            _ => false,
        }
    }
}

/// Named date window relative to "today", recomputed on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    Today,
    Tomorrow,
    Yesterday,
    /// Today through seven days ahead (inclusive).
    NextSevenDays,
    /// Seven days ago through today (inclusive).
    PastSevenDays,
}

impl DateWindow {
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateWindow::Today => date == today,
            DateWindow::Tomorrow => date == today + Duration::days(1),
            DateWindow::Yesterday => date == today - Duration::days(1),
            DateWindow::NextSevenDays => date >= today && date <= today + Duration::days(7),
            DateWindow::PastSevenDays => date >= today - Duration::days(7) && date <= today,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DateWindow::Today => "today",
            DateWindow::Tomorrow => "tomorrow",
            DateWindow::Yesterday => "yesterday",
            DateWindow::NextSevenDays => "next-7-days",
            DateWindow::PastSevenDays => "past-7-days",
        }
    }
}

/// Parse a record timestamp attribute as a calendar date.
///
/// Accepts plain dates (`2024-08-30`) and RFC 3339 timestamps
/// (`2024-08-25T10:30:00Z`). Returns `None` for anything else.
pub fn parse_record_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|ts| ts.date_naive())
}

/// The filter state of one list page: configured dimensions plus their
/// current values. Dimensions without an entry in `values` are unconstrained.
pub struct FilterSet<R> {
    dimensions: Vec<Dimension<R>>,
    values: HashMap<&'static str, FilterValue>,
}

impl<R> FilterSet<R> {
    pub fn new(dimensions: Vec<Dimension<R>>) -> Self {
        Self {
            dimensions,
            values: HashMap::new(),
        }
    }

    pub fn dimensions(&self) -> &[Dimension<R>] {
        &self.dimensions
    }

    /// Replace the current value for a dimension. Setting an unknown
    /// dimension is a no-op (logged), not an error.
    pub fn set(&mut self, dimension: &str, value: FilterValue) {
        let Some(dim) = self.dimensions.iter().find(|d| d.name == dimension) else {
            warn!(dimension, "ignoring value for unknown filter dimension");
            return;
        };
        self.values.insert(dim.name, value);
    }

    /// Current value for a dimension (`All` when unset).
    pub fn value(&self, dimension: &str) -> FilterValue {
        self.values.get(dimension).cloned().unwrap_or_default()
    }

    /// Reset every dimension to unconstrained.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// True when no dimension constrains the view.
    pub fn is_unconstrained(&self) -> bool {
        self.values.values().all(FilterValue::is_all)
    }

    /// Evaluate all dimensions against one record (logical AND).
    pub fn matches(&self, record: &R, today: NaiveDate) -> bool {
        self.dimensions.iter().all(|dim| {
            let value = self.values.get(dim.name).cloned().unwrap_or_default();
            dim.matches(record, &value, today)
        })
    }
}

/// Compute the derived view: the subsequence of `records` matching all
/// active dimensions, in original order. Pure; recomputed in full on demand.
pub fn derive_view<'a, R>(
    records: &'a [R],
    filters: &FilterSet<R>,
    today: NaiveDate,
) -> Vec<&'a R> {
    records
        .iter()
        .filter(|record| filters.matches(record, today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        phone: &'static str,
        status: &'static str,
        automatic: bool,
        due: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Sarah Johnson",
                phone: "+1 (555) 123-4567",
                status: "submitted",
                automatic: true,
                due: "2024-08-26",
            },
            Row {
                name: "Mike Chen",
                phone: "+1 (555) 234-5678",
                status: "pending",
                automatic: false,
                due: "2024-08-27T09:00:00Z",
            },
            Row {
                name: "Emily Davis",
                phone: "+1 (555) 345-6789",
                status: "submitted",
                automatic: true,
                due: "not a date",
            },
        ]
    }

    fn dimensions() -> Vec<Dimension<Row>> {
        vec![
            Dimension::text("search", vec![|r: &Row| Some(r.name), |r: &Row| Some(r.phone)]),
            Dimension::category("status", |r: &Row| r.status),
            Dimension::flag("cycle", |r: &Row| r.automatic, "automatic", "manual"),
            Dimension::date("due", |r: &Row| Some(r.due)),
        ]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 26).unwrap()
    }

    #[test]
    fn test_unconstrained_is_identity() {
        let rows = rows();
        let filters = FilterSet::new(dimensions());
        let view = derive_view(&rows, &filters, today());
        assert_eq!(view.len(), rows.len());
        assert!(filters.is_unconstrained());
    }

    #[test]
    fn test_text_search_case_insensitive() {
        let rows = rows();
        let mut filters = FilterSet::new(dimensions());
        filters.set("search", FilterValue::Text("sarah".to_string()));
        let view = derive_view(&rows, &filters, today());
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Sarah Johnson");
    }

    #[test]
    fn test_text_search_or_across_fields() {
        let rows = rows();
        let mut filters = FilterSet::new(dimensions());
        filters.set("search", FilterValue::Text("234-5678".to_string()));
        let view = derive_view(&rows, &filters, today());
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Mike Chen");
    }

    #[test]
    fn test_category_and_flag_combine_with_and() {
        let rows = rows();
        let mut filters = FilterSet::new(dimensions());
        filters.set("status", FilterValue::Choice("submitted".to_string()));
        filters.set("cycle", FilterValue::Choice("manual".to_string()));
        let view = derive_view(&rows, &filters, today());
        assert!(view.is_empty());

        filters.set("cycle", FilterValue::Choice("automatic".to_string()));
        let view = derive_view(&rows, &filters, today());
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_date_window_tomorrow() {
        let rows = rows();
        let mut filters = FilterSet::new(dimensions());
        filters.set("due", FilterValue::Window(DateWindow::Tomorrow));
        let view = derive_view(&rows, &filters, today());
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Mike Chen");
    }

    #[test]
    fn test_malformed_date_never_matches_active_window() {
        let rows = rows();
        let mut filters = FilterSet::new(dimensions());
        filters.set("due", FilterValue::Window(DateWindow::NextSevenDays));
        let view = derive_view(&rows, &filters, today());
        assert!(view.iter().all(|r| r.name != "Emily Davis"));
    }

    #[test]
    fn test_unknown_dimension_ignored() {
        let rows = rows();
        let mut filters = FilterSet::new(dimensions());
        filters.set("nonexistent", FilterValue::Choice("x".to_string()));
        let view = derive_view(&rows, &filters, today());
        assert_eq!(view.len(), rows.len());
    }

    #[test]
    fn test_parse_record_date_formats() {
        assert!(parse_record_date("2024-08-30").is_some());
        assert!(parse_record_date("2024-08-25T10:30:00Z").is_some());
        assert!(parse_record_date("08/30/2024").is_none());
        assert!(parse_record_date("").is_none());
    }

    #[test]
    fn test_window_boundaries() {
        let today = today();
        let week_out = today + Duration::days(7);
        let beyond = today + Duration::days(8);
        assert!(DateWindow::NextSevenDays.contains(today, today));
        assert!(DateWindow::NextSevenDays.contains(week_out, today));
        assert!(!DateWindow::NextSevenDays.contains(beyond, today));
        assert!(DateWindow::PastSevenDays.contains(today - Duration::days(7), today));
        assert!(!DateWindow::PastSevenDays.contains(today + Duration::days(1), today));
    }
}
