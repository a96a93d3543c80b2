use thiserror::Error;

/// Application-wide error types.
///
/// Every failure that can reach the API boundary is represented here. The
/// server crate maps each variant onto an HTTP status code.
///
/// # Error Conversion
///
/// `sqlx::Error` converts automatically into [`AppError::StoreUnavailable`],
/// so repository code can use `?` directly on query results.
///
/// # Examples
///
/// ```
/// use mindscope_core::error::AppError;
///
/// let err = AppError::ResponseNotFound(42);
/// assert_eq!(err.to_string(), "Response with id=42 not found");
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// The backing store could not be reached or a query failed.
    ///
    /// This covers connection failures, pool timeouts and query execution
    /// errors alike. It is fatal for the request: callers never receive a
    /// partial or empty result in its place.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    /// No record exists with the requested id.
    #[error("Response with id={0} not found")]
    ResponseNotFound(i64),
}

impl AppError {
    /// Returns a user-friendly error message suitable for operator output.
    pub fn user_message(&self) -> String {
        match self {
            AppError::StoreUnavailable(e) => {
                if matches!(e, sqlx::Error::PoolTimedOut) || e.to_string().contains("connection")
                {
                    "Cannot connect to database. Is PostgreSQL running?\n   Check DATABASE_URL."
                        .to_string()
                } else {
                    format!("Database error: {}", e)
                }
            }
            _ => self.to_string(),
        }
    }

    /// Returns true if this error originates from the store rather than the request.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, AppError::StoreUnavailable(_))
    }
}
