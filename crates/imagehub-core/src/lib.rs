//! # imagehub-core
//!
//! Core crate for ImageHub. Contains the configuration schema, the
//! operation kinds and phases, the driver and plugin traits, the
//! per-request [`OperationContext`], and the unified error system.
//!
//! This crate has **no** internal dependencies on other ImageHub crates.

pub mod config;
pub mod context;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use context::OperationContext;
pub use error::AppError;
pub use result::AppResult;
