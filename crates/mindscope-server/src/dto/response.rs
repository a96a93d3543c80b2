//! Response DTOs for API endpoints.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use mindscope_core::{MentalHealthResponse, WordFrequency};

// =============================================================================
// Health
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("healthy" or "degraded")
    pub status: String,
    /// Server version
    pub version: String,
    /// Database connectivity status
    pub database: ServiceStatus,
}

/// Status of an individual service component.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    /// Whether the service is reachable
    pub healthy: bool,
    /// Optional message (e.g., error details)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// =============================================================================
// Analytics
// =============================================================================

/// Record count per normalized status label.
#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct DistributionResponse(pub BTreeMap<String, i64>);

/// Most frequent content words per normalized status label.
#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct TopWordsResponse(pub BTreeMap<String, Vec<WordFrequencyDto>>);

/// Median word count per normalized status label, outliers excluded.
#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct LengthStatsResponse(pub BTreeMap<String, f64>);

/// A word and how often it occurs within one category.
#[derive(Debug, Serialize, ToSchema)]
pub struct WordFrequencyDto {
    pub word: String,
    pub freq: i64,
}

impl From<WordFrequency> for WordFrequencyDto {
    fn from(w: WordFrequency) -> Self {
        Self {
            word: w.word,
            freq: w.freq,
        }
    }
}

impl From<BTreeMap<String, Vec<WordFrequency>>> for TopWordsResponse {
    fn from(by_status: BTreeMap<String, Vec<WordFrequency>>) -> Self {
        Self(
            by_status
                .into_iter()
                .map(|(status, words)| {
                    (
                        status,
                        words.into_iter().map(WordFrequencyDto::from).collect(),
                    )
                })
                .collect(),
        )
    }
}

// =============================================================================
// Records
// =============================================================================

/// A single statement record.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResponseDto {
    /// Record identifier
    pub id: i64,
    /// Preprocessed statement text
    pub clean_statement: Option<String>,
    /// Status label as stored (empty when the stored label is null)
    pub status: String,
}

impl From<MentalHealthResponse> for ResponseDto {
    fn from(r: MentalHealthResponse) -> Self {
        Self {
            id: r.id,
            clean_statement: r.clean_statement,
            status: r.status.unwrap_or_default(),
        }
    }
}
