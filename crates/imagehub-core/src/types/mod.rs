//! Core type definitions used across the ImageHub workspace.

pub mod image;
pub mod operation;
pub mod request;
pub mod response;

pub use image::{Image, ImageInfo, validate_hash};
pub use operation::{OperationKind, Phase, PhaseKey};
pub use request::OperationRequest;
pub use response::{OperationResponse, ResponseBody};
