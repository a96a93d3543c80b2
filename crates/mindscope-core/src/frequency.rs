//! Top words per category.
//!
//! Counts are accumulated per category across every text in that category,
//! then ranked by frequency. Equal frequencies are ordered by the position
//! at which each word was first counted, so output is stable as long as rows
//! arrive in a stable order (the store streams them by record id).

use std::collections::{BTreeMap, HashMap};

use crate::models::{StatusText, WordFrequency, normalize_status};
use crate::text::content_words;

/// Occurrence counts for one category, remembering first-seen order.
#[derive(Debug, Default, Clone)]
pub struct TokenCount {
    index: HashMap<String, usize>,
    entries: Vec<(String, i64)>,
}

impl TokenCount {
    pub fn add(&mut self, token: String) {
        match self.index.get(&token) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, 1));
            }
        }
    }

    #[cfg(test)]
    fn get(&self, token: &str) -> Option<i64> {
        self.index.get(token).map(|&pos| self.entries[pos].1)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the `n` most frequent tokens, ties broken by first occurrence.
    pub fn most_common(&self, n: usize) -> Vec<WordFrequency> {
        let mut ranked: Vec<&(String, i64)> = self.entries.iter().collect();
        // stable sort keeps insertion order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(word, freq)| WordFrequency {
                word: word.clone(),
                freq: *freq,
            })
            .collect()
    }
}

/// Incremental top-words computation over a stream of rows.
#[derive(Debug, Default)]
pub struct FrequencyAggregator {
    by_status: BTreeMap<String, TokenCount>,
    rows_seen: usize,
}

impl FrequencyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one row. Rows with a blank status are ignored.
    pub fn push(&mut self, row: &StatusText) {
        let Some(status) = normalize_status(&row.status) else {
            return;
        };
        let counts = self.by_status.entry(status.to_string()).or_default();
        for word in content_words(&row.text) {
            counts.add(word);
        }
        self.rows_seen += 1;
    }

    /// Number of rows accepted so far.
    pub fn rows_seen(&self) -> usize {
        self.rows_seen
    }

    /// Produces the ranked word list for every category seen.
    ///
    /// A category whose texts produced no content words maps to an empty list.
    pub fn finish(self, top_n: usize) -> BTreeMap<String, Vec<WordFrequency>> {
        self.by_status
            .into_iter()
            .map(|(status, counts)| (status, counts.most_common(top_n)))
            .collect()
    }
}

/// Computes the top words for every category in `rows`.
pub fn top_words<'a, I>(rows: I, top_n: usize) -> BTreeMap<String, Vec<WordFrequency>>
where
    I: IntoIterator<Item = &'a StatusText>,
{
    let mut aggregator = FrequencyAggregator::new();
    for row in rows {
        aggregator.push(row);
    }
    aggregator.finish(top_n)
}
