//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::dto::{
    DistributionResponse, ExamplesQuery, HealthResponse, LengthStatsResponse, ResponseDto,
    ResponsesQuery, ServiceStatus, TopWordsQuery, TopWordsResponse, WordFrequencyDto,
};
use crate::handlers::{analytics, health, responses};

/// OpenAPI documentation for the Mindscope API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mindscope API",
        version = "0.1.0",
        description = "Read-only analytics over a corpus of mental health statements.

Each record carries a free-text statement, a cleaned version of it, and a
status label such as `Anxiety` or `Normal`.

## Quick Start

1. Check server health: `GET /mental-health/health`
2. Label distribution: `GET /mental-health/analytics/distribution`
3. Frequent words: `GET /mental-health/analytics/top-words?top_n=10`
",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        health::health_check,
        analytics::get_distribution,
        analytics::get_top_words,
        analytics::get_length_stats,
        analytics::get_examples,
        responses::list_responses,
        responses::get_response_by_id,
    ),
    components(
        schemas(
            // Request types
            TopWordsQuery,
            ExamplesQuery,
            ResponsesQuery,
            // Response types
            HealthResponse,
            ServiceStatus,
            DistributionResponse,
            TopWordsResponse,
            WordFrequencyDto,
            LengthStatsResponse,
            ResponseDto,
        )
    ),
    tags(
        (name = "system", description = "Server health"),
        (name = "analytics", description = "Aggregates over the statement corpus"),
        (name = "responses", description = "Statement record retrieval"),
    )
)]
pub struct ApiDoc;
