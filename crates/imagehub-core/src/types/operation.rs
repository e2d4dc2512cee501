//! Operation kinds, execution phases, and the `"<kind><Phase>"` keys
//! plugins use to declare interest.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The closed set of operations the pipeline supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OperationKind {
    /// Store a new image.
    AddImage,
    /// Remove an image and its metadata.
    DeleteImage,
    /// Merge new metadata into an image's metadata.
    EditMetadata,
    /// Fetch an image, optionally transformed.
    GetImage,
    /// Fetch an image's metadata.
    GetMetadata,
    /// Remove all metadata of an image.
    DeleteMetadata,
}

impl OperationKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [OperationKind; 6] = [
        Self::AddImage,
        Self::DeleteImage,
        Self::EditMetadata,
        Self::GetImage,
        Self::GetMetadata,
        Self::DeleteMetadata,
    ];

    /// The operation name used in plugin interest keys (`"getImage"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddImage => "addImage",
            Self::DeleteImage => "deleteImage",
            Self::EditMetadata => "editMetadata",
            Self::GetImage => "getImage",
            Self::GetMetadata => "getMetadata",
            Self::DeleteMetadata => "deleteMetadata",
        }
    }

    /// The type-style name (`"GetImage"`).
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::AddImage => "AddImage",
            Self::DeleteImage => "DeleteImage",
            Self::EditMetadata => "EditMetadata",
            Self::GetImage => "GetImage",
            Self::GetMetadata => "GetMetadata",
            Self::DeleteMetadata => "DeleteMetadata",
        }
    }

    /// Whether the operation reads an image without changing state.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::GetImage | Self::GetMetadata)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = AppError;

    /// Accepts both `"GetImage"` and `"getImage"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| s == kind.as_str() || s == kind.type_name())
            .ok_or_else(|| AppError::unsupported_operation(s))
    }
}

/// Execution phase relative to an operation's core logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Runs before the core logic.
    PreExec,
    /// Runs after the core logic.
    PostExec,
}

impl Phase {
    /// Both phases, in execution order.
    pub const ALL: [Phase; 2] = [Self::PreExec, Self::PostExec];

    /// Suffix used in interest keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreExec => "PreExec",
            Self::PostExec => "PostExec",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A `(kind, phase)` pair, rendered as `"<kind><Phase>"` (`"getImagePostExec"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhaseKey {
    /// Operation kind.
    pub kind: OperationKind,
    /// Phase within the operation.
    pub phase: Phase,
}

impl PhaseKey {
    /// Creates a key.
    pub fn new(kind: OperationKind, phase: Phase) -> Self {
        Self { kind, phase }
    }
}

impl fmt::Display for PhaseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.phase)
    }
}

impl FromStr for PhaseKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for phase in Phase::ALL {
            if let Some(kind) = s.strip_suffix(phase.as_str()) {
                let kind = kind.parse::<OperationKind>().map_err(|_| {
                    AppError::validation(format!("Unknown operation in interest key '{s}'"))
                })?;
                return Ok(Self::new(kind, phase));
            }
        }
        Err(AppError::validation(format!(
            "Interest key '{s}' does not end in PreExec or PostExec"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_kind_parses_both_spellings() {
        assert_eq!(
            "GetImage".parse::<OperationKind>().unwrap(),
            OperationKind::GetImage
        );
        assert_eq!(
            "deleteMetadata".parse::<OperationKind>().unwrap(),
            OperationKind::DeleteMetadata
        );
    }

    #[test]
    fn test_unknown_kind_is_unsupported() {
        let err = "UnknownKind".parse::<OperationKind>().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedOperation);
        assert!("getimage".parse::<OperationKind>().is_err());
        assert!("".parse::<OperationKind>().is_err());
    }

    #[test]
    fn test_phase_key_display_and_parse() {
        let key = PhaseKey::new(OperationKind::AddImage, Phase::PreExec);
        assert_eq!(key.to_string(), "addImagePreExec");
        assert_eq!("addImagePreExec".parse::<PhaseKey>().unwrap(), key);
        assert_eq!(
            "getMetadataPostExec".parse::<PhaseKey>().unwrap(),
            PhaseKey::new(OperationKind::GetMetadata, Phase::PostExec)
        );
    }

    #[test]
    fn test_phase_key_rejects_garbage() {
        assert!("getImage".parse::<PhaseKey>().is_err());
        assert!("renameImagePreExec".parse::<PhaseKey>().is_err());
    }
}
