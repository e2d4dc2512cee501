//! # imagehub-operation
//!
//! Turns an inbound request into a running operation: the
//! [`OperationFactory`] validates the kind and wires a context, the
//! [`Pipeline`] runs pre-exec plugins, the kind's core handler, and
//! post-exec plugins.

pub mod factory;
pub mod handlers;
pub mod pipeline;

pub use factory::OperationFactory;
pub use pipeline::Pipeline;
