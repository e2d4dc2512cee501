//! # imagehub-api
//!
//! HTTP API layer for ImageHub built on Axum.
//!
//! Maps routes onto operation kinds, runs them through the operation
//! pipeline, and renders the resulting context as an HTTP response.

pub mod app;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
