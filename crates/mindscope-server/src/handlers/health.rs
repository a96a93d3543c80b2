//! Health check endpoint.

use axum::{Json, extract::State};
use tracing::warn;

use crate::dto::{HealthResponse, ServiceStatus};
use crate::state::AppState;

/// Health check endpoint.
///
/// Always answers 200; database reachability is reported in the body.
#[utoipa::path(
    get,
    path = "/mental-health/health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.analytics_service.health_check().await {
        Ok(()) => ServiceStatus {
            healthy: true,
            message: None,
        },
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            ServiceStatus {
                healthy: false,
                message: Some(e.user_message()),
            }
        }
    };

    let status = if database.healthy { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    })
}
