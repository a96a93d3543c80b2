//! Record endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};

use crate::dto::{ResponseDto, ResponsesQuery};
use crate::error::ApiError;
use crate::state::AppState;

/// Page through statement records in id order.
#[utoipa::path(
    get,
    path = "/mental-health/responses",
    params(ResponsesQuery),
    responses(
        (status = 200, description = "Page of records", body = Vec<ResponseDto>),
        (status = 400, description = "skip or limit out of range"),
        (status = 503, description = "Data store unavailable"),
    ),
    tag = "responses"
)]
pub async fn list_responses(
    State(state): State<AppState>,
    query: Result<Query<ResponsesQuery>, QueryRejection>,
) -> Result<Json<Vec<ResponseDto>>, ApiError> {
    let Query(params) = query?;
    let (skip, limit) = params.page()?;

    let records = state.analytics_service.list_responses(skip, limit).await?;
    Ok(Json(records.into_iter().map(ResponseDto::from).collect()))
}

/// Get a single record by id.
#[utoipa::path(
    get,
    path = "/mental-health/responses/{id}",
    params(
        ("id" = i64, Path, description = "Record identifier")
    ),
    responses(
        (status = 200, description = "Record found", body = ResponseDto),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Record not found"),
        (status = 503, description = "Data store unavailable"),
    ),
    tag = "responses"
)]
pub async fn get_response_by_id(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ResponseDto>, ApiError> {
    let Path(id) = id?;

    let record = state.analytics_service.get_response(id).await?;
    Ok(Json(ResponseDto::from(record)))
}
