//! Mindscope Server - REST API for mental health statement analytics
//!
//! This crate exposes the analytics in `mindscope-core` over HTTP:
//!
//! - **Analytics**: Label distribution, top words, median lengths and examples
//! - **Responses**: Paged and single-record access to the corpus
//!
//! # API Documentation
//!
//! When running the server, interactive API documentation is available
//! at `/swagger-ui`.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::{BASE_PATH, create_router};
pub use state::AppState;
