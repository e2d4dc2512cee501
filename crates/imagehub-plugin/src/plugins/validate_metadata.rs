//! Validation of metadata documents.

use async_trait::async_trait;
use serde_json::Value;

use imagehub_core::context::OperationContext;
use imagehub_core::error::AppError;
use imagehub_core::result::AppResult;
use imagehub_core::traits::plugin::{InterestMap, OperationPlugin};
use imagehub_core::types::operation::{OperationKind, Phase};

use super::BUILTIN_NAMESPACE;

/// Context attribute holding the parsed metadata object.
pub const METADATA_ATTRIBUTE: &str = "metadata";

/// Parses the request body as a JSON object with non-empty keys.
pub fn parse_metadata(body: &[u8]) -> AppResult<serde_json::Map<String, Value>> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::validation(format!("Metadata is not valid JSON: {e}")))?;

    let Value::Object(map) = value else {
        return Err(AppError::validation("Metadata must be a JSON object"));
    };
    if map.keys().any(|k| k.is_empty()) {
        return Err(AppError::validation("Metadata keys must not be empty"));
    }
    Ok(map)
}

/// Rejects malformed metadata before `EditMetadata` and hands the parsed
/// object to the core logic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateMetadataPlugin;

impl ValidateMetadataPlugin {
    /// Plugin name.
    pub const NAME: &'static str = "validate-metadata";
}

#[async_trait]
impl OperationPlugin for ValidateMetadataPlugin {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn namespace(&self) -> &str {
        BUILTIN_NAMESPACE
    }

    fn interests(&self) -> InterestMap {
        InterestMap::new().with(OperationKind::EditMetadata, Phase::PreExec, 10)
    }

    async fn exec(&self, ctx: &mut OperationContext) -> AppResult<()> {
        let metadata = parse_metadata(&ctx.request.body)?;
        ctx.set_attribute(METADATA_ATTRIBUTE, Value::Object(metadata));
        Ok(())
    }
}
