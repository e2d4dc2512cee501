//! AddImage: persist a new image.

use std::sync::Arc;

use axum::http::StatusCode;
use tracing::{info, warn};

use imagehub_core::context::OperationContext;
use imagehub_core::error::AppError;
use imagehub_core::result::AppResult;
use imagehub_core::types::image::Image;

use super::identifier_body;

/// Inserts the image record, then stores the blob.
///
/// The record is removed again if the blob cannot be stored.
pub async fn run(ctx: &mut OperationContext) -> AppResult<()> {
    if ctx.request.body.is_empty() {
        return Err(AppError::validation("No image data in request body"));
    }
    if ctx.image.is_empty() {
        ctx.image = Image::from_blob(ctx.request.body.clone());
    }

    let database = Arc::clone(ctx.database());
    let storage = Arc::clone(ctx.storage());
    let info = ctx.image.info(&ctx.hash);

    database.insert_image(&info).await?;

    if let Err(e) = storage.store(&ctx.hash, ctx.image.blob.clone()).await {
        if let Err(rollback) = database.delete_image(&ctx.hash).await {
            warn!(hash = %ctx.hash, error = %rollback, "Failed to roll back image record");
        }
        return Err(e);
    }

    info!(
        owner = %ctx.request.owner,
        hash = %ctx.hash,
        size = info.size,
        "Image added"
    );
    ctx.response.json(StatusCode::CREATED, identifier_body(&ctx.hash));
    Ok(())
}
