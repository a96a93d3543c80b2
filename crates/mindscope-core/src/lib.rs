//! Mindscope Core - Domain types, text analytics and services.
//!
//! This crate provides the analytics layer of the mindscope API:
//!
//! - **Domain models**: [`MentalHealthResponse`], [`StatusCount`], [`StatusText`], [`WordFrequency`]
//! - **Text processing**: tokenization and stopword filtering in [`text`]
//! - **Aggregators**: [`distribution`], [`frequency`] (top words) and [`length`] (median word counts)
//! - **Services**: [`AnalyticsService`] tying the aggregators to a store
//! - **Traits**: [`ResponseStore`] abstracting the read-only data store
//!
//! # Architecture
//!
//! Aggregators are synchronous and pure: they fold rows into ordered maps and
//! never touch I/O. The service drives them from the rows a [`ResponseStore`]
//! yields, so the same logic runs against PostgreSQL (`mindscope-db`) and
//! against in-memory stores in tests.
//!
//! Output maps are `BTreeMap`s keyed by normalized status, which keeps
//! serialized responses identical across repeated calls on unchanged data.

pub mod analytics;
pub mod distribution;
pub mod error;
pub mod frequency;
pub mod length;
pub mod models;
pub mod text;
pub mod traits;

// Error handling
pub use error::AppError;

// Domain models
pub use models::{MentalHealthResponse, StatusCount, StatusText, WordFrequency, normalize_status};

// Aggregators
pub use frequency::{FrequencyAggregator, TokenCount};
pub use length::{LengthAggregator, OUTLIER_WORD_THRESHOLD};

// Traits for dependency injection
pub use traits::ResponseStore;

// Services
pub use analytics::AnalyticsService;
