//! List-view engine: filtering, selection, statistics, bulk actions
//!
//! Every list page of the dashboard is an instance of the same pattern: a
//! fixed record store, a handful of filter dimensions combined with AND, a
//! derived view preserving store order, a row selection constrained to that
//! view, summary counts over the full store, and bulk actions over the
//! selection. [`ListView`] wires the pieces together; pages supply a small
//! declarative configuration (dimensions + columns, see [`crate::catalog`]).

pub mod actions;
pub mod filter;
pub mod selection;
pub mod stats;

pub use actions::{ActionSink, BulkAction, LogSink};
pub use filter::{derive_view, DateWindow, Dimension, DimensionKind, FilterSet, FilterValue};
pub use selection::Selection;
pub use stats::{count_by, count_where, percentage, Breakdown, Precision};

use chrono::{Local, NaiveDate};

/// A record that can appear in a list view.
///
/// Identifiers are unique within a store and stable for the session.
pub trait Record {
    fn id(&self) -> &str;
}

/// One displayed column of a list page: header plus a value formatter.
pub struct Column<R> {
    pub header: &'static str,
    pub value: fn(&R) -> String,
}

/// Filter, selection and view state for one list page.
///
/// The record store is borrowed and never mutated; filters and selection are
/// owned by the page instance (single writer, no locking - all transitions
/// happen inside UI event handlers).
pub struct ListView<'a, R: Record> {
    records: &'a [R],
    filters: FilterSet<R>,
    selection: Selection,
}

impl<'a, R: Record> ListView<'a, R> {
    pub fn new(records: &'a [R], dimensions: Vec<Dimension<R>>) -> Self {
        Self {
            records,
            filters: FilterSet::new(dimensions),
            selection: Selection::new(),
        }
    }

    /// The full backing store, unfiltered.
    pub fn records(&self) -> &'a [R] {
        self.records
    }

    pub fn filters(&self) -> &FilterSet<R> {
        &self.filters
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Derived view as of today.
    pub fn view(&self) -> Vec<&'a R> {
        self.view_at(current_date())
    }

    /// Derived view with an explicit reference date (deterministic tests,
    /// date-window filters).
    pub fn view_at(&self, today: NaiveDate) -> Vec<&'a R> {
        derive_view(self.records, &self.filters, today)
    }

    /// Update one filter dimension, then prune selected identifiers that
    /// fell out of the narrowed view so Selection stays a subset of it.
    pub fn set_filter(&mut self, dimension: &str, value: FilterValue) {
        self.set_filter_at(dimension, value, current_date());
    }

    pub fn set_filter_at(&mut self, dimension: &str, value: FilterValue, today: NaiveDate) {
        self.filters.set(dimension, value);
        let view = derive_view(self.records, &self.filters, today);
        self.selection.retain_within(view.iter().map(|r| r.id()));
    }

    /// Reset every dimension and the selection.
    pub fn reset_filters(&mut self) {
        self.filters.reset();
        self.selection.clear();
    }

    /// Header checkbox: select the whole derived view, or clear.
    pub fn select_all(&mut self, checked: bool) {
        self.select_all_at(checked, current_date());
    }

    pub fn select_all_at(&mut self, checked: bool, today: NaiveDate) {
        if checked {
            let view = self.view_at(today);
            self.selection.select_all(view.iter().map(|r| r.id()));
        } else {
            self.selection.clear();
        }
    }

    /// Row checkbox. Identifiers outside the current view are ignored so
    /// the subset invariant cannot be violated from the outside.
    pub fn select_one(&mut self, id: &str, checked: bool) {
        self.select_one_at(id, checked, current_date());
    }

    pub fn select_one_at(&mut self, id: &str, checked: bool, today: NaiveDate) {
        if checked && !self.view_at(today).iter().any(|r| r.id() == id) {
            return;
        }
        self.selection.select_one(id, checked);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Header checkbox visual state.
    pub fn all_selected(&self) -> bool {
        self.all_selected_at(current_date())
    }

    pub fn all_selected_at(&self, today: NaiveDate) -> bool {
        self.selection.covers(self.view_at(today).len())
    }

    /// Forward a bulk action plus the selected identifiers to the sink and
    /// clear the selection, regardless of the sink's outcome.
    pub fn dispatch(&mut self, action: BulkAction, sink: &dyn ActionSink) -> Vec<String> {
        let ids = self.selection.to_vec();
        sink.dispatch(action, &ids);
        self.selection.clear();
        ids
    }
}

fn current_date() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::actions::testing::RecordingSink;
    use super::*;

    struct Item {
        id: &'static str,
        name: &'static str,
        status: &'static str,
    }

    impl Record for Item {
        fn id(&self) -> &str {
            self.id
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: "1", name: "Sarah Johnson", status: "submitted" },
            Item { id: "2", name: "Mike Chen", status: "pending" },
            Item { id: "3", name: "Emily Davis", status: "submitted" },
        ]
    }

    fn dimensions() -> Vec<Dimension<Item>> {
        vec![
            Dimension::text("search", vec![|i: &Item| Some(i.name)]),
            Dimension::category("status", |i: &Item| i.status),
        ]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 26).unwrap()
    }

    #[test]
    fn test_select_all_then_narrow_prunes() {
        let items = items();
        let mut list = ListView::new(&items, dimensions());
        list.select_all_at(true, today());
        assert_eq!(list.selection().len(), 3);

        list.set_filter_at("status", FilterValue::Choice("pending".into()), today());
        assert_eq!(list.selection().to_vec(), vec!["2".to_string()]);

        list.set_filter_at("search", FilterValue::Text("sarah".into()), today());
        assert!(list.selection().is_empty());
    }

    #[test]
    fn test_select_one_outside_view_ignored() {
        let items = items();
        let mut list = ListView::new(&items, dimensions());
        list.set_filter_at("status", FilterValue::Choice("submitted".into()), today());
        list.select_one_at("2", true, today());
        assert!(list.selection().is_empty());

        list.select_one_at("1", true, today());
        assert_eq!(list.selection().len(), 1);
    }

    #[test]
    fn test_dispatch_clears_selection() {
        let items = items();
        let mut list = ListView::new(&items, dimensions());
        let sink = RecordingSink::default();

        list.select_all_at(true, today());
        let ids = list.dispatch(BulkAction::Export, &sink);
        assert_eq!(ids.len(), 3);
        assert!(list.selection().is_empty());
        assert_eq!(sink.calls.borrow().len(), 1);
    }

    #[test]
    fn test_all_selected_header_state() {
        let items = items();
        let mut list = ListView::new(&items, dimensions());
        assert!(!list.all_selected_at(today()));

        list.set_filter_at("status", FilterValue::Choice("submitted".into()), today());
        list.select_all_at(true, today());
        assert!(list.all_selected_at(today()));

        list.select_one_at("1", false, today());
        assert!(!list.all_selected_at(today()));
    }

    #[test]
    fn test_reset_filters_clears_selection() {
        let items = items();
        let mut list = ListView::new(&items, dimensions());
        list.select_all_at(true, today());
        list.reset_filters();
        assert!(list.selection().is_empty());
        assert!(list.filters().is_unconstrained());
    }
}
