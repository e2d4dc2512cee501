//! Image add, fetch and delete handlers.

use axum::extract::{Path, State};
use axum::http::Method;
use axum::response::Response;
use axum_extra::extract::Query;
use bytes::Bytes;
use serde::Deserialize;

use imagehub_core::types::operation::OperationKind;
use imagehub_core::types::request::OperationRequest;

use crate::error::ApiError;
use crate::render::render;
use crate::state::AppState;

/// Query of image fetches: `?t[]=rotate:angle=90&t[]=flipVertically`.
#[derive(Debug, Default, Deserialize)]
pub struct TransformQuery {
    /// Transformation fragments, in application order.
    #[serde(rename = "t[]", default)]
    pub t: Vec<String>,
}

/// PUT /users/{owner}/images/{hash}
pub async fn add_image(
    State(state): State<AppState>,
    Path((owner, hash)): Path<(String, String)>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = OperationRequest::new(owner).with_body(body);
    let ctx = state
        .run_operation(OperationKind::AddImage, Method::PUT, &hash, request)
        .await?;
    Ok(render(ctx))
}

/// GET|HEAD /users/{owner}/images/{hash}
pub async fn get_image(
    State(state): State<AppState>,
    method: Method,
    Path((owner, hash)): Path<(String, String)>,
    Query(query): Query<TransformQuery>,
) -> Result<Response, ApiError> {
    let request = OperationRequest::new(owner).with_transformations(query.t);
    let ctx = state
        .run_operation(OperationKind::GetImage, method, &hash, request)
        .await?;
    Ok(render(ctx))
}

/// DELETE /users/{owner}/images/{hash}
pub async fn delete_image(
    State(state): State<AppState>,
    Path((owner, hash)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let ctx = state
        .run_operation(
            OperationKind::DeleteImage,
            Method::DELETE,
            &hash,
            OperationRequest::new(owner),
        )
        .await?;
    Ok(render(ctx))
}
