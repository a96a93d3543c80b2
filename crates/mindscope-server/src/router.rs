//! Router configuration and route composition.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::{Router, routing::get};
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;
use crate::handlers::{analytics, health, responses};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Prefix shared by every API route.
pub const BASE_PATH: &str = "/mental-health";

/// Creates the main application router with all routes and middleware.
///
/// The rate limiter keys on the peer IP, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn create_router(state: AppState, config: &ServerConfig) -> anyhow::Result<Router> {
    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/analytics/distribution",
            get(analytics::get_distribution),
        )
        .route("/analytics/top-words", get(analytics::get_top_words))
        .route("/analytics/length-stats", get(analytics::get_length_stats))
        .route("/analytics/examples", get(analytics::get_examples))
        .route("/responses", get(responses::list_responses))
        .route("/responses/:id", get(responses::get_response_by_id));

    // Arc required for cloning in layers
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(config.rate_limit_replenish_ms)
            .burst_size(config.rate_limit_burst)
            .finish()
            .context("Invalid rate limit configuration")?,
    );

    let cors_layer = build_cors_layer(&config.cors_origins);

    Ok(Router::new()
        .nest(BASE_PATH, api_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware layers (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(GovernorLayer {
            config: governor_config,
        })
        .with_state(state))
}

/// Build CORS layer from configuration.
///
/// If `origins` is "*", allows any origin.
/// Otherwise, parses comma-separated origins.
fn build_cors_layer(origins: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600));

    if origins == "*" {
        cors.allow_origin(tower_http::cors::Any)
    } else {
        let allowed: Vec<HeaderValue> = origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(allowed)
    }
}
