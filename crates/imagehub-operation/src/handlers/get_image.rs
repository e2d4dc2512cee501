//! GetImage: load an image's properties and blob.

use axum::http::StatusCode;

use imagehub_core::context::OperationContext;
use imagehub_core::result::AppResult;
use imagehub_core::types::image::Image;
use imagehub_core::types::response::ResponseBody;

pub async fn run(ctx: &mut OperationContext) -> AppResult<()> {
    let info = ctx.database().load_image(&ctx.hash).await?;
    let blob = ctx.storage().load(&ctx.hash).await?;

    let mut image = Image::from_blob(blob);
    image.apply_info(&info);
    ctx.image = image;

    ctx.response.status = StatusCode::OK;
    ctx.response.body = ResponseBody::Image;
    Ok(())
}
