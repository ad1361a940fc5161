//! End-to-end properties of the list-view engine.

use chrono::NaiveDate;
use coachboard_core::catalog;
use coachboard_core::seed;
use coachboard_core::view::{
    derive_view, ActionSink, Breakdown, BulkAction, Dimension, FilterSet, FilterValue, ListView,
    Record,
};
use std::sync::Mutex;

#[derive(Clone)]
struct Fixture {
    id: &'static str,
    name: &'static str,
    status: &'static str,
}

impl Record for Fixture {
    fn id(&self) -> &str {
        self.id
    }
}

fn fixtures() -> Vec<Fixture> {
    vec![
        Fixture { id: "1", name: "Sarah Johnson", status: "submitted" },
        Fixture { id: "2", name: "Mike Chen", status: "pending" },
        Fixture { id: "3", name: "Emily Davis", status: "submitted" },
    ]
}

fn dimensions() -> Vec<Dimension<Fixture>> {
    vec![
        Dimension::text("search", vec![|f: &Fixture| Some(f.name)]),
        Dimension::category("status", |f: &Fixture| f.status),
    ]
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 26).unwrap()
}

struct NullSink;

impl ActionSink for NullSink {
    fn dispatch(&self, _action: BulkAction, _ids: &[String]) {}
}

/// Property 1: identical inputs produce identical derived views.
#[test]
fn derive_view_is_deterministic() {
    let records = fixtures();
    let mut filters = FilterSet::new(dimensions());
    filters.set("status", FilterValue::Choice("submitted".to_string()));

    let first: Vec<&str> = derive_view(&records, &filters, today())
        .iter()
        .map(|f| f.id())
        .collect();
    let second: Vec<&str> = derive_view(&records, &filters, today())
        .iter()
        .map(|f| f.id())
        .collect();
    assert_eq!(first, second);
}

/// Property 2: all dimensions unconstrained is the identity filter.
#[test]
fn identity_filter_returns_store_in_order() {
    let records = fixtures();
    let filters = FilterSet::new(dimensions());
    let view = derive_view(&records, &filters, today());
    assert_eq!(view.len(), records.len());
    for (got, expected) in view.iter().zip(records.iter()) {
        assert_eq!(got.id(), expected.id());
    }
}

/// Property 3: no filter combination fabricates records.
#[test]
fn derived_view_is_subset_of_store() {
    let records = fixtures();
    let queries = ["", "sarah", "zzz", "e"];
    let statuses = ["submitted", "pending", "nonexistent"];
    for query in queries {
        for status in statuses {
            let mut filters = FilterSet::new(dimensions());
            filters.set("search", FilterValue::Text(query.to_string()));
            filters.set("status", FilterValue::Choice(status.to_string()));
            let view = derive_view(&records, &filters, today());
            assert!(view.len() <= records.len());
            for item in view {
                assert!(records.iter().any(|r| r.id() == item.id()));
            }
        }
    }
}

/// Property 4: selection is always a subset of the current view's ids.
#[test]
fn selection_bounded_by_view_after_any_sequence() {
    let records = fixtures();
    let mut list = ListView::new(&records, dimensions());

    list.select_all_at(true, today());
    list.select_one_at("2", false, today());
    list.select_one_at("2", true, today());
    list.set_filter_at("status", FilterValue::Choice("submitted".to_string()), today());
    list.select_one_at("1", true, today());

    let view_ids: Vec<&str> = list.view_at(today()).iter().map(|f| f.id()).collect();
    for id in list.selection().ids() {
        assert!(view_ids.contains(&id));
    }
}

/// Property 5: an exhaustive partition's counts sum to the store size.
#[test]
fn stats_totality_over_partition() {
    let records = fixtures();
    let breakdown = Breakdown::from_records(&records, |f| f.status);
    assert_eq!(breakdown.sum(), records.len());
}

/// Property 6: empty store yields zero counts and zero percentages.
#[test]
fn stats_zero_division_safety() {
    let empty: Vec<Fixture> = Vec::new();
    let breakdown = Breakdown::from_records(&empty, |f| f.status);
    assert_eq!(breakdown.total(), 0);
    assert_eq!(breakdown.count("submitted"), 0);
    assert_eq!(breakdown.percentage("submitted"), 0.0);
    assert!(!breakdown.percentage("submitted").is_nan());
}

/// Property 7: the concrete submitted/pending scenario.
#[test]
fn concrete_status_breakdown_and_filter() {
    let records = fixtures();
    let breakdown = Breakdown::from_records(&records, |f| f.status);
    assert_eq!(breakdown.count("submitted"), 2);
    assert_eq!(breakdown.count("pending"), 1);
    assert_eq!(breakdown.total(), 3);

    let mut filters = FilterSet::new(dimensions());
    filters.set("status", FilterValue::Choice("submitted".to_string()));
    let view = derive_view(&records, &filters, today());
    let ids: Vec<&str> = view.iter().map(|f| f.id()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

/// Property 8: case-insensitive search over the seeded client store.
#[test]
fn concrete_search_scenario() {
    let store = seed::store();
    let spec = catalog::clients::all();
    let mut list = spec.list_view(store.clients());
    list.set_filter("search", FilterValue::Text("sarah".to_string()));
    let view = list.view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Sarah Johnson");
}

/// Property 9: select-all then narrowing to zero matches empties selection.
#[test]
fn select_all_then_narrow_to_empty() {
    let records = fixtures();
    let mut list = ListView::new(&records, dimensions());
    list.select_all_at(true, today());
    assert_eq!(list.selection().len(), 3);

    list.set_filter_at("search", FilterValue::Text("no such client".to_string()), today());
    assert!(list.view_at(today()).is_empty());
    assert!(list.selection().is_empty());
}

/// Property 10: dispatch leaves the selection empty as soon as it returns.
#[test]
fn dispatch_clears_selection_immediately() {
    let records = fixtures();
    let mut list = ListView::new(&records, dimensions());
    list.select_all_at(true, today());
    assert!(!list.selection().is_empty());

    let ids = list.dispatch(BulkAction::Delete, &NullSink);
    assert_eq!(ids.len(), 3);
    assert!(list.selection().is_empty());
}

/// Dispatch forwards the payload even when the sink is shared state.
#[test]
fn dispatch_forwards_selected_ids() {
    struct CollectingSink(Mutex<Vec<(BulkAction, Vec<String>)>>);

    impl ActionSink for CollectingSink {
        fn dispatch(&self, action: BulkAction, ids: &[String]) {
            self.0.lock().unwrap().push((action, ids.to_vec()));
        }
    }

    let records = fixtures();
    let mut list = ListView::new(&records, dimensions());
    let sink = CollectingSink(Mutex::new(Vec::new()));

    list.set_filter_at("status", FilterValue::Choice("submitted".to_string()), today());
    list.select_all_at(true, today());
    list.dispatch(BulkAction::Approve, &sink);

    let calls = sink.0.into_inner().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, BulkAction::Approve);
    assert_eq!(calls[0].1, vec!["1".to_string(), "3".to_string()]);
}
