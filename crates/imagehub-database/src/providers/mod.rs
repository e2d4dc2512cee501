//! Database driver implementations.

pub mod json;
pub mod memory;

pub use json::JsonDatabase;
pub use memory::MemoryDatabase;
