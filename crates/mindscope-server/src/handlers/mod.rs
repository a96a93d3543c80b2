//! HTTP request handlers for API endpoints.

pub mod analytics;
pub mod health;
pub mod responses;
