//! Core logic of each operation kind.
//!
//! A handler runs between the pre-exec and post-exec plugin phases. It
//! talks to the drivers and fills `ctx.image` / `ctx.response`.

pub mod add_image;
pub mod delete_image;
pub mod delete_metadata;
pub mod edit_metadata;
pub mod get_image;
pub mod get_metadata;

use serde_json::json;

use imagehub_core::context::OperationContext;
use imagehub_core::result::AppResult;
use imagehub_core::types::operation::OperationKind;

/// Runs the core handler of the context's kind.
pub async fn execute(ctx: &mut OperationContext) -> AppResult<()> {
    match ctx.kind() {
        OperationKind::AddImage => add_image::run(ctx).await,
        OperationKind::DeleteImage => delete_image::run(ctx).await,
        OperationKind::EditMetadata => edit_metadata::run(ctx).await,
        OperationKind::GetImage => get_image::run(ctx).await,
        OperationKind::GetMetadata => get_metadata::run(ctx).await,
        OperationKind::DeleteMetadata => delete_metadata::run(ctx).await,
    }
}

/// `{"imageIdentifier": <hash>}`, the body of every write operation.
pub(crate) fn identifier_body(hash: &str) -> serde_json::Value {
    json!({ "imageIdentifier": hash })
}
