//! Median word count per category.

use std::collections::BTreeMap;

use crate::models::{StatusText, normalize_status};

/// Texts with more words than this are treated as outliers and skipped.
pub const OUTLIER_WORD_THRESHOLD: usize = 400;

/// Number of whitespace-delimited words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Median of `values`, or `None` for an empty slice.
///
/// ```
/// use mindscope_core::length::median;
///
/// assert_eq!(median(&mut [7, 3, 5]), Some(5.0));
/// assert_eq!(median(&mut [3, 5, 7, 9]), Some(6.0));
/// ```
pub fn median(values: &mut [usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable();
    let mid = values.len() / 2;
    let median = if values.len() % 2 == 1 {
        values[mid] as f64
    } else {
        (values[mid - 1] as f64 + values[mid] as f64) / 2.0
    };
    Some(round2(median))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Incremental length statistics over a stream of rows.
#[derive(Debug, Default)]
pub struct LengthAggregator {
    counts_by_status: BTreeMap<String, Vec<usize>>,
    excluded: usize,
}

impl LengthAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one row, skipping blank statuses, empty texts and outliers.
    pub fn push(&mut self, row: &StatusText) {
        let Some(status) = normalize_status(&row.status) else {
            return;
        };
        let words = word_count(&row.text);
        if words == 0 || words > OUTLIER_WORD_THRESHOLD {
            self.excluded += 1;
            return;
        }
        self.counts_by_status
            .entry(status.to_string())
            .or_default()
            .push(words);
    }

    /// Rows dropped as empty or over the outlier threshold.
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    /// Produces the rounded median for every category with surviving rows.
    pub fn finish(self) -> BTreeMap<String, f64> {
        self.counts_by_status
            .into_iter()
            .filter_map(|(status, mut counts)| median(&mut counts).map(|m| (status, m)))
            .collect()
    }
}

/// Computes the median word count for every category in `rows`.
pub fn length_stats<'a, I>(rows: I) -> BTreeMap<String, f64>
where
    I: IntoIterator<Item = &'a StatusText>,
{
    let mut aggregator = LengthAggregator::new();
    for row in rows {
        aggregator.push(row);
    }
    aggregator.finish()
}
