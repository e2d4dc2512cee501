//! The output record an operation fills in.

use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

use crate::error::AppError;

/// What the response should carry once the operation is done.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResponseBody {
    /// No body.
    #[default]
    Empty,
    /// The context's image payload.
    Image,
    /// A JSON document.
    Json(serde_json::Value),
}

/// Mutable response record owned by the operation context.
#[derive(Debug, Clone, Default)]
pub struct OperationResponse {
    /// Status code (200 until changed).
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Body reference.
    pub body: ResponseBody,
}

impl OperationResponse {
    /// Sets a header, replacing any previous value.
    pub fn set_header(&mut self, name: &str, value: &str) -> Result<(), AppError> {
        let name = HeaderName::try_from(name)
            .map_err(|e| AppError::internal(format!("Invalid header name '{name}': {e}")))?;
        let value = HeaderValue::try_from(value)
            .map_err(|e| AppError::internal(format!("Invalid header value '{value}': {e}")))?;
        self.headers.insert(name, value);
        Ok(())
    }

    /// Reads a header as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Sets a JSON body with the given status.
    pub fn json(&mut self, status: StatusCode, body: serde_json::Value) {
        self.status = status;
        self.body = ResponseBody::Json(body);
    }
}
