//! DeleteImage: remove an image record and its blob.

use std::sync::Arc;

use axum::http::StatusCode;
use tracing::{info, warn};

use imagehub_core::context::OperationContext;
use imagehub_core::result::AppResult;

use super::identifier_body;

/// Deletes the record, then the blob.
///
/// A blob that cannot be deleted once its record is gone is logged as
/// orphaned and the error is returned.
pub async fn run(ctx: &mut OperationContext) -> AppResult<()> {
    let database = Arc::clone(ctx.database());
    let storage = Arc::clone(ctx.storage());

    database.delete_image(&ctx.hash).await?;
    if let Err(e) = storage.delete(&ctx.hash).await {
        warn!(hash = %ctx.hash, error = %e, "Image record deleted but blob was not; blob is orphaned");
        return Err(e);
    }

    info!(owner = %ctx.request.owner, hash = %ctx.hash, "Image deleted");
    ctx.response.json(StatusCode::OK, identifier_body(&ctx.hash));
    Ok(())
}
