// crates/domain/src/model/outcome.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Result of transforming a single file.
///
/// Per-file failures are values, not errors: the batch keeps going and the
/// caller decides what a failure means for the exit status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Minified {
        source: PathBuf,
        destination: PathBuf,
        bytes_in: usize,
        bytes_out: usize,
    },
    ReadFailed {
        source: PathBuf,
        message: String,
    },
    WriteFailed {
        source: PathBuf,
        destination: Option<PathBuf>,
        message: String,
    },
}

impl FileOutcome {
    pub fn source(&self) -> &Path {
        match self {
            Self::Minified { source, .. } | Self::ReadFailed { source, .. } | Self::WriteFailed { source, .. } => {
                source
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Minified { .. })
    }

    /// Error message for failed outcomes.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Minified { .. } => None,
            Self::ReadFailed { message, .. } | Self::WriteFailed { message, .. } => Some(message),
        }
    }
}
