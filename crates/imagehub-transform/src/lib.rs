//! # imagehub-transform
//!
//! Image transformations. Every transformation can be applied in two
//! modes: to the encoded bytes of an [`Image`](imagehub_core::types::Image),
//! or to an [`ImageUrl`], where it only appends a descriptor fragment such
//! as `rotate:angle=90,bg=000000`. Two transformations with equal
//! descriptors produce identical output.

pub mod chain;
pub mod codec;
pub mod color;
pub mod contract;
pub mod error;
pub mod params;
pub mod spec;
pub mod transformations;
pub mod url;

pub use chain::{TransformationChain, parse_fragment};
pub use contract::Transformation;
pub use error::TransformationError;
pub use spec::TransformationSpec;
pub use url::ImageUrl;
