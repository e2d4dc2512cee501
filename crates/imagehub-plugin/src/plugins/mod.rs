//! Plugins shipped under the built-in search path.

pub mod cache_tag;
pub mod identify_image;
pub mod manipulate_image;
pub mod validate_metadata;

pub use cache_tag::{CacheTagPlugin, cache_tag_value};
pub use identify_image::IdentifyImagePlugin;
pub use manipulate_image::ManipulateImagePlugin;
pub use validate_metadata::ValidateMetadataPlugin;

/// Namespace of the built-in plugins.
pub const BUILTIN_NAMESPACE: &str = "imagehub::builtin";
