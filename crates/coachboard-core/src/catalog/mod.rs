//! Per-page list configurations
//!
//! Each list screen instantiates the generic engine with a small declarative
//! config: its filter dimensions and select controls, displayed columns,
//! summary cards and bulk actions. The front ends (TUI table, CLI
//! comfy-table, CSV export) all consume the same [`PageSpec`].

pub mod calendar;
pub mod checkins;
pub mod clients;
pub mod leads;
pub mod reminders;
pub mod requests;

use crate::view::{BulkAction, Column, Dimension, DateWindow, FilterValue, Precision, Record};

/// Semantic tone of a summary card; front ends map it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

/// One summary card above a list.
#[derive(Debug, Clone)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub detail: &'static str,
    pub tone: Tone,
}

impl StatCard {
    pub fn count(label: &'static str, value: usize, detail: &'static str, tone: Tone) -> Self {
        Self {
            label,
            value: value.to_string(),
            detail,
            tone,
        }
    }
}

/// Const-constructible option value for a select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceValue {
    Choice(&'static str),
    Window(DateWindow),
}

impl ChoiceValue {
    pub fn to_filter_value(self) -> FilterValue {
        match self {
            ChoiceValue::Choice(c) => FilterValue::Choice(c.to_string()),
            ChoiceValue::Window(w) => FilterValue::Window(w),
        }
    }
}

/// One option of a select control.
#[derive(Debug, Clone, Copy)]
pub struct FilterOption {
    pub label: &'static str,
    pub value: ChoiceValue,
}

pub const fn option(label: &'static str, value: &'static str) -> FilterOption {
    FilterOption {
        label,
        value: ChoiceValue::Choice(value),
    }
}

pub const fn window(label: &'static str, value: DateWindow) -> FilterOption {
    FilterOption {
        label,
        value: ChoiceValue::Window(value),
    }
}

/// A select control rendered next to the search bar. The implicit first
/// option is always the unconstrained "All ..." sentinel.
#[derive(Debug, Clone, Copy)]
pub struct FilterControl {
    pub dimension: &'static str,
    /// Label of the "all" option ("All Groups", "All Status", ...).
    pub all_label: &'static str,
    pub options: &'static [FilterOption],
}

/// Declarative configuration of one list page.
pub struct PageSpec<R: Record + 'static> {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub search_placeholder: &'static str,
    /// Fresh dimension set for a new [`crate::view::ListView`].
    pub dimensions: fn() -> Vec<Dimension<R>>,
    pub controls: &'static [FilterControl],
    pub columns: &'static [Column<R>],
    /// Summary cards computed over the full store.
    pub stats: fn(&[R], Precision) -> Vec<StatCard>,
    pub actions: &'static [BulkAction],
}

impl<R: Record + 'static> PageSpec<R> {
    /// Instantiate the engine for this page over a record store.
    pub fn list_view<'a>(&self, records: &'a [R]) -> crate::view::ListView<'a, R> {
        crate::view::ListView::new(records, (self.dimensions)())
    }
}

/// Display helper: `2024-08-25T10:30:00Z` -> `2024-08-25 10:30`, date-only
/// strings unchanged, malformed input passed through untouched.
pub fn format_timestamp(value: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(value) {
        Ok(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_value_conversion() {
        assert_eq!(
            ChoiceValue::Choice("active").to_filter_value(),
            FilterValue::Choice("active".to_string())
        );
        assert_eq!(
            ChoiceValue::Window(DateWindow::Today).to_filter_value(),
            FilterValue::Window(DateWindow::Today)
        );
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-08-25T10:30:00Z"), "2024-08-25 10:30");
        assert_eq!(format_timestamp("2024-08-25"), "2024-08-25");
        assert_eq!(format_timestamp("garbage"), "garbage");
    }
}
