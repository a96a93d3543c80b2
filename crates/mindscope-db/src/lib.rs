//! Mindscope DB - Read-only repository layer for PostgreSQL
//!
//! This crate implements the [`ResponseStore`](mindscope_core::ResponseStore)
//! trait over the `mental_health_responses` table. It is the only place in
//! the workspace that issues SQL.

mod repository;

pub use repository::ResponseRepository;
