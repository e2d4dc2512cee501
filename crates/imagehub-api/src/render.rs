//! Rendering of a finished operation context as an HTTP response.

use axum::Json;
use axum::body::Body;
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};

use imagehub_core::context::OperationContext;
use imagehub_core::types::response::ResponseBody;

/// Width of the returned image.
pub const IMAGE_WIDTH_HEADER: &str = "x-imagehub-image-width";
/// Height of the returned image.
pub const IMAGE_HEIGHT_HEADER: &str = "x-imagehub-image-height";

/// Converts `ctx.response` (and `ctx.image` for image bodies) into a response.
pub fn render(ctx: OperationContext) -> Response {
    let OperationContext {
        image, response, ..
    } = ctx;
    let mut headers = response.headers;

    match response.body {
        ResponseBody::Empty => (response.status, headers).into_response(),
        ResponseBody::Json(value) => (response.status, headers, Json(value)).into_response(),
        ResponseBody::Image => {
            let content_type = image
                .mime_type
                .as_deref()
                .and_then(|m| HeaderValue::from_str(m).ok())
                .unwrap_or(HeaderValue::from_static("application/octet-stream"));
            headers.insert(header::CONTENT_TYPE, content_type);
            headers.insert(IMAGE_WIDTH_HEADER, HeaderValue::from(image.width));
            headers.insert(IMAGE_HEIGHT_HEADER, HeaderValue::from(image.height));

            (response.status, headers, Body::from(image.blob)).into_response()
        }
    }
}
