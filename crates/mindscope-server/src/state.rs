use mindscope_core::AnalyticsService;
use mindscope_db::ResponseRepository;

/// Shared application state for all handlers.
///
/// Cloned per request by Axum; the only shared resource underneath is the
/// connection pool, which is itself reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Analytics and record lookups over the statement table
    pub analytics_service: AnalyticsService<ResponseRepository>,
}

impl AppState {
    /// Creates a new application state over the given pool.
    pub fn new(pool: sqlx::PgPool) -> Self {
        let repo = ResponseRepository::new(pool);

        Self {
            analytics_service: AnalyticsService::new(repo),
        }
    }
}
