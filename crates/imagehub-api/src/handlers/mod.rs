//! HTTP request handlers.

pub mod health;
pub mod image;
pub mod metadata;
pub mod plugins;
