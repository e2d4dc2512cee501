//! EditMetadata: merge a metadata document into an image's metadata.

use axum::http::StatusCode;
use serde_json::Value;
use tracing::debug;

use imagehub_core::context::OperationContext;
use imagehub_core::result::AppResult;
use imagehub_plugin::plugins::validate_metadata::{METADATA_ATTRIBUTE, parse_metadata};

use super::identifier_body;

/// Uses the object parsed by the validation plugin when present, otherwise
/// parses the request body itself.
pub async fn run(ctx: &mut OperationContext) -> AppResult<()> {
    let metadata = match ctx.attribute(METADATA_ATTRIBUTE) {
        Some(Value::Object(map)) => map.clone(),
        _ => parse_metadata(&ctx.request.body)?,
    };

    debug!(hash = %ctx.hash, keys = metadata.len(), "Merging metadata");
    ctx.database().update_metadata(&ctx.hash, metadata).await?;

    ctx.response.json(StatusCode::OK, identifier_body(&ctx.hash));
    Ok(())
}
