//! # imagehub-database
//!
//! Database drivers persisting image properties and caller metadata, and
//! the closed registry that resolves a configured driver identifier.

pub mod providers;
pub mod record;
pub mod registry;

pub use registry::build_database;
