//! Statement repository for PostgreSQL.
//!
//! All queries are read-only. Each one borrows a connection from the pool for
//! its own duration; the connection goes back to the pool when the query
//! future completes or is dropped, including on error and cancellation.

use futures::StreamExt;
use futures::stream::BoxStream;
use mindscope_core::error::AppError;
use mindscope_core::models::{MentalHealthResponse, StatusCount, StatusText};
use sqlx::{PgPool, Pool, Postgres};

/// Table holding the labeled statements.
#[cfg(test)]
const RESPONSES_TABLE: &str = "mental_health_responses";

// Static queries. Kept as literals so that no runtime string building touches SQL.
// `id` is cast so that INTEGER and BIGINT key columns both decode as i64.
const STATUS_COUNTS_QUERY: &str = r#"
    SELECT status, COUNT(id) AS count
    FROM mental_health_responses
    WHERE status IS NOT NULL AND BTRIM(status, E' \t\r\n') <> ''
    GROUP BY status
"#;

const STATUS_TEXTS_QUERY: &str = r#"
    SELECT status, clean_statement AS text
    FROM mental_health_responses
    WHERE status IS NOT NULL AND BTRIM(status, E' \t\r\n') <> ''
      AND clean_statement IS NOT NULL AND clean_statement <> ''
    ORDER BY id
"#;

const EXAMPLES_QUERY: &str = r#"
    SELECT clean_statement
    FROM mental_health_responses
    WHERE status = $1
      AND clean_statement IS NOT NULL AND clean_statement <> ''
    ORDER BY id
    LIMIT $2
"#;

const LIST_QUERY: &str = r#"
    SELECT id::BIGINT AS id, statement, clean_statement, status
    FROM mental_health_responses
    ORDER BY id
    OFFSET $1
    LIMIT $2
"#;

const GET_BY_ID_QUERY: &str = r#"
    SELECT id::BIGINT AS id, statement, clean_statement, status
    FROM mental_health_responses
    WHERE id = $1
"#;

/// Repository for read access to `mental_health_responses`.
///
/// # Examples
///
/// ```no_run
/// use sqlx::postgres::PgPoolOptions;
/// use mindscope_db::ResponseRepository;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = PgPoolOptions::new()
///     .max_connections(5)
///     .connect("postgresql://localhost/mindscope")
///     .await?;
///
/// let repo = ResponseRepository::new(pool);
/// let counts = repo.status_counts().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ResponseRepository {
    pool: Pool<Postgres>,
}

impl ResponseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Counts records grouped by raw, untrimmed status.
    pub async fn status_counts(&self) -> Result<Vec<StatusCount>, AppError> {
        let rows = sqlx::query_as::<_, StatusCount>(STATUS_COUNTS_QUERY)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::StoreUnavailable)?;

        Ok(rows)
    }

    /// Streams (status, clean_statement) rows ordered by id.
    ///
    /// Rows are decoded as they arrive, so callers can fold the whole table
    /// without holding it in memory.
    pub fn status_texts_stream(&self) -> BoxStream<'_, Result<StatusText, AppError>> {
        Box::pin(
            sqlx::query_as::<_, StatusText>(STATUS_TEXTS_QUERY)
                .fetch(&self.pool)
                .map(|r| r.map_err(AppError::StoreUnavailable)),
        )
    }

    /// Up to `limit` clean statements whose status equals `status` byte for byte.
    pub async fn examples(&self, status: &str, limit: i64) -> Result<Vec<String>, AppError> {
        let texts = sqlx::query_scalar::<_, String>(EXAMPLES_QUERY)
            .bind(status)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::StoreUnavailable)?;

        Ok(texts)
    }

    /// Lists records ordered by id.
    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<MentalHealthResponse>, AppError> {
        let records = sqlx::query_as::<_, MentalHealthResponse>(LIST_QUERY)
            .bind(skip)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::StoreUnavailable)?;

        Ok(records)
    }

    /// Retrieves a record by id.
    pub async fn get(&self, id: i64) -> Result<Option<MentalHealthResponse>, AppError> {
        let record = sqlx::query_as::<_, MentalHealthResponse>(GET_BY_ID_QUERY)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::StoreUnavailable)?;

        Ok(record)
    }

    /// Checks database connectivity by executing a simple query.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(AppError::StoreUnavailable)?;
        Ok(())
    }
}

// =============================================================================
// Trait Implementation: ResponseStore
// =============================================================================

impl mindscope_core::traits::ResponseStore for ResponseRepository {
    async fn status_counts(&self) -> Result<Vec<StatusCount>, AppError> {
        ResponseRepository::status_counts(self).await
    }

    fn status_texts(&self) -> BoxStream<'_, Result<StatusText, AppError>> {
        ResponseRepository::status_texts_stream(self)
    }

    async fn examples(&self, status: &str, limit: i64) -> Result<Vec<String>, AppError> {
        ResponseRepository::examples(self, status, limit).await
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<MentalHealthResponse>, AppError> {
        ResponseRepository::list(self, skip, limit).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<MentalHealthResponse>, AppError> {
        ResponseRepository::get(self, id).await
    }

    async fn health_check(&self) -> Result<(), AppError> {
        ResponseRepository::health_check(self).await
    }
}
