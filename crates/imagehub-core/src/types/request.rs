//! Transport-supplied request data an operation reads.

use bytes::Bytes;

/// What the HTTP layer hands to an operation besides kind, method and hash.
#[derive(Debug, Clone, Default)]
pub struct OperationRequest {
    /// Key of the account that owns the image.
    pub owner: String,
    /// Raw request body (image bytes or a metadata document).
    pub body: Bytes,
    /// Transformation fragments from the `t[]` query parameter, in order.
    pub transformations: Vec<String>,
}

impl OperationRequest {
    /// A request on behalf of `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..Self::default()
        }
    }

    /// Sets the request body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the requested transformations.
    pub fn with_transformations(mut self, transformations: Vec<String>) -> Self {
        self.transformations = transformations;
        self
    }
}
