//! # imagehub-storage
//!
//! Storage drivers for ImageHub image payloads, and the closed registry
//! that resolves a configured driver identifier to an instance.

pub mod providers;
pub mod registry;

pub use registry::build_storage;
