//! Aggregate statistics over record stores
//!
//! Summary-card counts and percentages are computed over the full record
//! store (not the filtered view), grouped by one categorical attribute.
//! Percentages short-circuit to 0 on an empty store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rounding precision for displayed percentages. The original screens mix
/// whole percents and one decimal, so this is per-page configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Precision {
    #[default]
    Whole,
    OneDecimal,
}

impl Precision {
    pub fn round(self, pct: f64) -> f64 {
        match self {
            Precision::Whole => pct.round(),
            Precision::OneDecimal => (pct * 10.0).round() / 10.0,
        }
    }

    pub fn format(self, pct: f64) -> String {
        match self {
            Precision::Whole => format!("{:.0}%", self.round(pct)),
            Precision::OneDecimal => format!("{:.1}%", self.round(pct)),
        }
    }
}

/// Share of `count` in `total` as a percentage; 0 when the store is empty.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total as f64
}

/// Count the records satisfying a predicate.
pub fn count_where<R>(records: &[R], predicate: impl Fn(&R) -> bool) -> usize {
    records.iter().filter(|r| predicate(r)).count()
}

/// Group record counts by one categorical attribute.
pub fn count_by<R>(records: &[R], key: impl Fn(&R) -> &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(key(record).to_string()).or_insert(0) += 1;
    }
    counts
}

/// Counts per category plus the store total, for summary cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown {
    counts: BTreeMap<String, usize>,
    total: usize,
}

impl Breakdown {
    pub fn from_records<R>(records: &[R], key: impl Fn(&R) -> &str) -> Self {
        Self {
            counts: count_by(records, key),
            total: records.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Count for one category (0 when the category never occurs).
    pub fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Percentage share for one category; 0 on an empty store.
    pub fn percentage(&self, label: &str) -> f64 {
        percentage(self.count(label), self.total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }

    /// Sum of all category counts. Equals `total()` when the grouping
    /// attribute partitions the store.
    pub fn sum(&self) -> usize {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rec(&'static str);

    #[test]
    fn test_count_by_partition_sums_to_total() {
        let records = vec![Rec("submitted"), Rec("pending"), Rec("submitted")];
        let breakdown = Breakdown::from_records(&records, |r| r.0);
        assert_eq!(breakdown.count("submitted"), 2);
        assert_eq!(breakdown.count("pending"), 1);
        assert_eq!(breakdown.sum(), breakdown.total());
        assert_eq!(breakdown.total(), 3);
    }

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(percentage(0, 0), 0.0);
        let empty: Vec<Rec> = Vec::new();
        let breakdown = Breakdown::from_records(&empty, |r| r.0);
        assert_eq!(breakdown.percentage("submitted"), 0.0);
        assert!(!breakdown.percentage("submitted").is_nan());
    }

    #[test]
    fn test_percentage_rounding() {
        let pct = percentage(1, 3);
        assert_eq!(Precision::Whole.round(pct), 33.0);
        assert_eq!(Precision::OneDecimal.round(pct), 33.3);
        assert_eq!(Precision::Whole.format(pct), "33%");
        assert_eq!(Precision::OneDecimal.format(pct), "33.3%");
    }

    #[test]
    fn test_count_where() {
        let records = vec![Rec("a"), Rec("b"), Rec("a")];
        assert_eq!(count_where(&records, |r| r.0 == "a"), 2);
    }
}
