//! DeleteMetadata: clear an image's metadata, keeping the image.

use axum::http::StatusCode;

use imagehub_core::context::OperationContext;
use imagehub_core::result::AppResult;

use super::identifier_body;

pub async fn run(ctx: &mut OperationContext) -> AppResult<()> {
    ctx.database().delete_metadata(&ctx.hash).await?;
    ctx.response.json(StatusCode::OK, identifier_body(&ctx.hash));
    Ok(())
}
