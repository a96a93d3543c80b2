//! Analytics service: runs the aggregators against a [`ResponseStore`].
//!
//! # Example
//!
//! ```ignore
//! use mindscope_core::AnalyticsService;
//!
//! let analytics = AnalyticsService::new(store);
//! let top = analytics.top_words(10).await?;
//! for (status, words) in &top {
//!     println!("{status}: {:?}", words);
//! }
//! ```
//!
//! Note: This example uses `ignore` because it requires a concrete
//! [`ResponseStore`] implementation.

use std::collections::BTreeMap;

use futures::StreamExt;
use tracing::debug;

use crate::distribution;
use crate::error::AppError;
use crate::frequency::FrequencyAggregator;
use crate::length::LengthAggregator;
use crate::models::{MentalHealthResponse, WordFrequency};
use crate::traits::ResponseStore;

/// Stateless analytics over the statement table.
///
/// Every call queries the store afresh; nothing is cached between calls.
/// Parameters are assumed to be validated by the caller.
pub struct AnalyticsService<S>
where
    S: ResponseStore,
{
    store: S,
}

impl<S> Clone for AnalyticsService<S>
where
    S: ResponseStore + Clone,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S> AnalyticsService<S>
where
    S: ResponseStore,
{
    /// Creates a new analytics service with the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Number of records per normalized status.
    pub async fn distribution(&self) -> Result<BTreeMap<String, i64>, AppError> {
        let rows = self.store.status_counts().await?;
        let raw_groups = rows.len();
        let counts = distribution::aggregate(rows);
        debug!(
            raw_groups,
            categories = counts.len(),
            "Computed status distribution"
        );
        Ok(counts)
    }

    /// The `top_n` most frequent content words per normalized status.
    pub async fn top_words(
        &self,
        top_n: usize,
    ) -> Result<BTreeMap<String, Vec<WordFrequency>>, AppError> {
        let mut rows = self.store.status_texts();
        let mut aggregator = FrequencyAggregator::new();
        while let Some(row) = rows.next().await {
            aggregator.push(&row?);
        }
        let rows_seen = aggregator.rows_seen();
        let result = aggregator.finish(top_n);
        debug!(
            rows_seen,
            top_n,
            categories = result.len(),
            "Computed top words"
        );
        Ok(result)
    }

    /// Median word count per normalized status, outliers excluded.
    pub async fn length_stats(&self) -> Result<BTreeMap<String, f64>, AppError> {
        let mut rows = self.store.status_texts();
        let mut aggregator = LengthAggregator::new();
        while let Some(row) = rows.next().await {
            aggregator.push(&row?);
        }
        let excluded = aggregator.excluded();
        let result = aggregator.finish();
        debug!(
            excluded,
            categories = result.len(),
            "Computed length statistics"
        );
        Ok(result)
    }

    /// Up to `n` cleaned texts for an exact status, ordered by record id.
    ///
    /// Unlike the aggregate endpoints the status is matched verbatim, without
    /// trimming. An unknown status yields an empty list.
    pub async fn examples(&self, status: &str, n: usize) -> Result<Vec<String>, AppError> {
        let limit = i64::try_from(n).unwrap_or(i64::MAX);
        let texts = self.store.examples(status, limit).await?;
        debug!(status, requested = n, returned = texts.len(), "Fetched examples");
        Ok(texts)
    }

    /// A page of raw records ordered by id.
    pub async fn list_responses(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<MentalHealthResponse>, AppError> {
        self.store.list(skip, limit).await
    }

    /// A single record, or [`AppError::ResponseNotFound`].
    pub async fn get_response(&self, id: i64) -> Result<MentalHealthResponse, AppError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or(AppError::ResponseNotFound(id))
    }

    /// Checks that the store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.store.health_check().await
    }
}
