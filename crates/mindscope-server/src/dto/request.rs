//! Request DTOs for API endpoints.
//!
//! Query parameters deserialize as plain integers and are range checked
//! here, so out-of-range values are rejected before any store access.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;

/// Bounds for the number of words returned per category.
pub const MIN_TOP_N: i64 = 1;
pub const MAX_TOP_N: i64 = 50;
pub const DEFAULT_TOP_N: i64 = 10;

/// Bounds for the number of example statements returned.
pub const MIN_EXAMPLES: i64 = 1;
pub const MAX_EXAMPLES: i64 = 50;
pub const DEFAULT_EXAMPLES: i64 = 5;

/// Bounds for record paging.
pub const DEFAULT_SKIP: i64 = 0;
pub const MIN_PAGE_LIMIT: i64 = 1;
pub const MAX_PAGE_LIMIT: i64 = 100;
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Query parameters for the top-words endpoint.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct TopWordsQuery {
    /// Words to return per category (default: 10, range: 1-50)
    #[param(example = 10)]
    pub top_n: Option<i64>,
}

impl TopWordsQuery {
    pub fn top_n(&self) -> Result<usize, ApiError> {
        let value = check_range(
            "top_n",
            self.top_n.unwrap_or(DEFAULT_TOP_N),
            MIN_TOP_N,
            MAX_TOP_N,
        )?;
        to_usize("top_n", value)
    }
}

/// Query parameters for the examples endpoint.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ExamplesQuery {
    /// Exact status label to sample (no trimming is applied)
    #[param(example = "Anxiety")]
    pub status: String,

    /// Statements to return (default: 5, range: 1-50)
    #[param(example = 5)]
    pub n: Option<i64>,
}

impl ExamplesQuery {
    pub fn n(&self) -> Result<usize, ApiError> {
        let value = check_range(
            "n",
            self.n.unwrap_or(DEFAULT_EXAMPLES),
            MIN_EXAMPLES,
            MAX_EXAMPLES,
        )?;
        to_usize("n", value)
    }
}

/// Query parameters for paging through records.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ResponsesQuery {
    /// Records to skip, in id order (default: 0)
    #[param(example = 0)]
    pub skip: Option<i64>,

    /// Maximum records to return (default: 100, range: 1-100)
    #[param(example = 100)]
    pub limit: Option<i64>,
}

impl ResponsesQuery {
    /// Returns `(skip, limit)` after validation.
    pub fn page(&self) -> Result<(i64, i64), ApiError> {
        let skip = self.skip.unwrap_or(DEFAULT_SKIP);
        if skip < 0 {
            return Err(ApiError::BadRequest(format!(
                "skip must be non-negative (got {skip})"
            )));
        }
        let limit = check_range(
            "limit",
            self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
            MIN_PAGE_LIMIT,
            MAX_PAGE_LIMIT,
        )?;
        Ok((skip, limit))
    }
}

fn check_range(name: &str, value: i64, min: i64, max: i64) -> Result<i64, ApiError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ApiError::BadRequest(format!(
            "{name} must be between {min} and {max} (got {value})"
        )))
    }
}

fn to_usize(name: &str, value: i64) -> Result<usize, ApiError> {
    usize::try_from(value).map_err(|_| ApiError::BadRequest(format!("{name} is out of range")))
}
