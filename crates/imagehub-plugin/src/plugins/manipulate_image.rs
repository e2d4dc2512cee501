//! Applies requested transformations to fetched images.

use async_trait::async_trait;
use tracing::debug;

use imagehub_core::context::OperationContext;
use imagehub_core::error::AppError;
use imagehub_core::result::AppResult;
use imagehub_core::traits::plugin::{InterestMap, OperationPlugin};
use imagehub_core::types::operation::{OperationKind, Phase};
use imagehub_transform::TransformationChain;

use super::BUILTIN_NAMESPACE;

/// Response header carrying the canonical descriptor of applied transformations.
pub const TRANSFORMATIONS_HEADER: &str = "X-Imagehub-Transformations";

/// Runs the `t[]` transformation chain on the image after `GetImage`.
///
/// Pixel work happens on the blocking pool; the plugin still completes
/// before the next one starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManipulateImagePlugin;

impl ManipulateImagePlugin {
    /// Plugin name.
    pub const NAME: &'static str = "manipulate-image";
}

#[async_trait]
impl OperationPlugin for ManipulateImagePlugin {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn namespace(&self) -> &str {
        BUILTIN_NAMESPACE
    }

    fn interests(&self) -> InterestMap {
        InterestMap::new().with(OperationKind::GetImage, Phase::PostExec, 10)
    }

    async fn exec(&self, ctx: &mut OperationContext) -> AppResult<()> {
        if ctx.request.transformations.is_empty() || ctx.image.is_empty() {
            return Ok(());
        }

        let chain = TransformationChain::parse(ctx.request.transformations.as_slice())?;
        let descriptor = chain.descriptor();

        // Restored if the chain fails.
        let original = ctx.image.clone();
        let mut image = std::mem::take(&mut ctx.image);
        let outcome = tokio::task::spawn_blocking(move || {
            chain.apply_to_image(&mut image).map(|()| image)
        })
        .await;

        match outcome {
            Ok(Ok(transformed)) => ctx.image = transformed,
            Ok(Err(e)) => {
                ctx.image = original;
                return Err(e.into());
            }
            Err(e) => {
                ctx.image = original;
                return Err(AppError::internal(format!("Transformation task failed: {e}")));
            }
        }

        debug!(
            hash = %ctx.hash,
            transformations = %descriptor,
            width = ctx.image.width,
            height = ctx.image.height,
            "Transformed image"
        );
        ctx.response.set_header(TRANSFORMATIONS_HEADER, &descriptor)?;
        Ok(())
    }
}
