//! GetMetadata: return an image's metadata document.

use axum::http::StatusCode;
use serde_json::Value;

use imagehub_core::context::OperationContext;
use imagehub_core::result::AppResult;

pub async fn run(ctx: &mut OperationContext) -> AppResult<()> {
    let metadata = ctx.database().get_metadata(&ctx.hash).await?;
    ctx.response.json(StatusCode::OK, Value::Object(metadata));
    Ok(())
}
