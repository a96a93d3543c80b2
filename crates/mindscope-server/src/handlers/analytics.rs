//! Analytics endpoints over the statement corpus.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::dto::{
    DistributionResponse, ExamplesQuery, LengthStatsResponse, TopWordsQuery, TopWordsResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Record count per status label.
///
/// Labels are trimmed before counting, so variants differing only in
/// surrounding whitespace are merged. Empty and null labels are excluded.
#[utoipa::path(
    get,
    path = "/mental-health/analytics/distribution",
    responses(
        (status = 200, description = "Count per status label", body = DistributionResponse),
        (status = 503, description = "Data store unavailable"),
    ),
    tag = "analytics"
)]
pub async fn get_distribution(
    State(state): State<AppState>,
) -> Result<Json<DistributionResponse>, ApiError> {
    let counts = state.analytics_service.distribution().await?;
    Ok(Json(DistributionResponse(counts)))
}

/// Most frequent content words per status label.
#[utoipa::path(
    get,
    path = "/mental-health/analytics/top-words",
    params(TopWordsQuery),
    responses(
        (status = 200, description = "Top words per status label", body = TopWordsResponse),
        (status = 400, description = "top_n out of range"),
        (status = 503, description = "Data store unavailable"),
    ),
    tag = "analytics"
)]
pub async fn get_top_words(
    State(state): State<AppState>,
    query: Result<Query<TopWordsQuery>, QueryRejection>,
) -> Result<Json<TopWordsResponse>, ApiError> {
    let Query(params) = query?;
    let top_n = params.top_n()?;

    let words = state.analytics_service.top_words(top_n).await?;
    Ok(Json(TopWordsResponse::from(words)))
}

/// Median statement length in words per status label.
///
/// Statements longer than 400 words are excluded before the median is taken.
#[utoipa::path(
    get,
    path = "/mental-health/analytics/length-stats",
    responses(
        (status = 200, description = "Median word count per status label", body = LengthStatsResponse),
        (status = 503, description = "Data store unavailable"),
    ),
    tag = "analytics"
)]
pub async fn get_length_stats(
    State(state): State<AppState>,
) -> Result<Json<LengthStatsResponse>, ApiError> {
    let medians = state.analytics_service.length_stats().await?;
    Ok(Json(LengthStatsResponse(medians)))
}

/// Example statements for one status label.
///
/// The label is matched exactly as stored; results are the lowest ids first.
#[utoipa::path(
    get,
    path = "/mental-health/analytics/examples",
    params(ExamplesQuery),
    responses(
        (status = 200, description = "Cleaned statements", body = Vec<String>),
        (status = 400, description = "Missing status or n out of range"),
        (status = 503, description = "Data store unavailable"),
    ),
    tag = "analytics"
)]
pub async fn get_examples(
    State(state): State<AppState>,
    query: Result<Query<ExamplesQuery>, QueryRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let Query(params) = query?;
    let n = params.n()?;

    let texts = state.analytics_service.examples(&params.status, n).await?;
    Ok(Json(texts))
}
