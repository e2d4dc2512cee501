//! Cache-invalidation tag on fetched images.
//!
//! Reverse proxies that support tag-based purging (Varnish HashTwo and
//! similar) index responses by this header, so every cached variant of an
//! image can be invalidated at once when it changes.

use async_trait::async_trait;
use tracing::debug;

use imagehub_core::context::OperationContext;
use imagehub_core::result::AppResult;
use imagehub_core::traits::plugin::{InterestMap, OperationPlugin};
use imagehub_core::types::operation::{OperationKind, Phase};

use super::BUILTIN_NAMESPACE;

/// The tag value for an image: `"<owner>|<hash>"`.
pub fn cache_tag_value(owner: &str, hash: &str) -> String {
    format!("{owner}|{hash}")
}

/// Sets the configured cache-tag header after `GetImage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheTagPlugin;

impl CacheTagPlugin {
    /// Plugin name.
    pub const NAME: &'static str = "cache-tag";
}

#[async_trait]
impl OperationPlugin for CacheTagPlugin {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn namespace(&self) -> &str {
        BUILTIN_NAMESPACE
    }

    fn interests(&self) -> InterestMap {
        InterestMap::new().with(OperationKind::GetImage, Phase::PostExec, 100)
    }

    async fn exec(&self, ctx: &mut OperationContext) -> AppResult<()> {
        let settings = &ctx.config().cache_tag;
        if !settings.enabled {
            return Ok(());
        }
        let header = settings.header.clone();

        let value = cache_tag_value(&ctx.request.owner, &ctx.hash);
        ctx.response.set_header(&header, &value)?;

        debug!(hash = %ctx.hash, header = %header, "Cache tag set");
        Ok(())
    }
}
