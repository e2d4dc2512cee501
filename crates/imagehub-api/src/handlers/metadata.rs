//! Metadata handlers.

use axum::extract::{Path, State};
use axum::http::Method;
use axum::response::Response;
use bytes::Bytes;

use imagehub_core::types::operation::OperationKind;
use imagehub_core::types::request::OperationRequest;

use crate::error::ApiError;
use crate::render::render;
use crate::state::AppState;

/// GET /users/{owner}/images/{hash}/meta
pub async fn get_metadata(
    State(state): State<AppState>,
    Path((owner, hash)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let ctx = state
        .run_operation(
            OperationKind::GetMetadata,
            Method::GET,
            &hash,
            OperationRequest::new(owner),
        )
        .await?;
    Ok(render(ctx))
}

/// POST|PUT /users/{owner}/images/{hash}/meta
pub async fn edit_metadata(
    State(state): State<AppState>,
    method: Method,
    Path((owner, hash)): Path<(String, String)>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = OperationRequest::new(owner).with_body(body);
    let ctx = state
        .run_operation(OperationKind::EditMetadata, method, &hash, request)
        .await?;
    Ok(render(ctx))
}

/// DELETE /users/{owner}/images/{hash}/meta
pub async fn delete_metadata(
    State(state): State<AppState>,
    Path((owner, hash)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let ctx = state
        .run_operation(
            OperationKind::DeleteMetadata,
            Method::DELETE,
            &hash,
            OperationRequest::new(owner),
        )
        .await?;
    Ok(render(ctx))
}
