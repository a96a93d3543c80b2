//! Trait definitions for the external data store.
//!
//! [`ResponseStore`] is the only seam between the analytics layer and the
//! database. Keeping it a trait allows:
//!
//! - **Testability**: in-memory mock stores for unit and integration tests
//! - **Decoupling**: analytics code never sees SQL or driver types
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use mindscope_core::traits::ResponseStore;
//! use mindscope_core::{AppError, distribution};
//!
//! async fn category_counts<S: ResponseStore>(
//!     store: &S,
//! ) -> Result<BTreeMap<String, i64>, AppError> {
//!     let rows = store.status_counts().await?;
//!     Ok(distribution::aggregate(rows))
//! }
//! ```

use std::future::Future;

use futures::stream::BoxStream;

use crate::{AppError, MentalHealthResponse, StatusCount, StatusText};

/// Read-only access to the statement table.
///
/// Implementations must map every driver failure to
/// [`AppError::StoreUnavailable`] and must never substitute an empty result
/// for a failed query.
pub trait ResponseStore: Send + Sync + Clone {
    /// Counts records grouped by raw status.
    ///
    /// Null statuses and statuses made only of spaces, tabs and line breaks
    /// are filtered by the store. Values are not trimmed, so `"Anxiety"` and
    /// `" Anxiety "` arrive as separate rows, and a label made of other
    /// Unicode whitespace may still arrive; callers drop it when normalizing.
    fn status_counts(&self) -> impl Future<Output = Result<Vec<StatusCount>, AppError>> + Send;

    /// Streams (status, cleaned text) rows ordered by record id.
    ///
    /// Rows with a null/empty `clean_statement` are filtered out by the store,
    /// as are statuses filtered by [`ResponseStore::status_counts`].
    fn status_texts(&self) -> BoxStream<'_, Result<StatusText, AppError>>;

    /// Fetches up to `limit` cleaned texts whose status equals `status` exactly.
    ///
    /// The comparison is case and whitespace sensitive. Results are ordered
    /// by record id; an unknown status yields an empty vector.
    fn examples(
        &self,
        status: &str,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<String>, AppError>> + Send;

    /// Lists whole records ordered by id with offset/limit paging.
    fn list(
        &self,
        skip: i64,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<MentalHealthResponse>, AppError>> + Send;

    /// Retrieves a single record by id.
    fn get_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<MentalHealthResponse>, AppError>> + Send;

    /// Checks connectivity to the store.
    fn health_check(&self) -> impl Future<Output = Result<(), AppError>> + Send;
}
