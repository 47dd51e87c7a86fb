// crates/domain/src/config.rs
use std::path::{Path, PathBuf};

use minify_files_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Where transformed content is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "output_dir", rename_all = "lowercase")]
pub enum OutputMode {
    /// Each file is replaced in place.
    Overwrite,
    /// Each file is written under this directory, keeping only its file name.
    Copy(PathBuf),
}

/// Immutable description of one batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinifyConfig {
    pub input_dir: PathBuf,
    pub mode: OutputMode,
}

impl MinifyConfig {
    /// Overwrite mode is selected when no output directory is given.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        let mode = output_dir.map_or(OutputMode::Overwrite, OutputMode::Copy);
        Self { input_dir: input_dir.into(), mode }
    }

    pub fn is_overwrite(&self) -> bool {
        matches!(self.mode, OutputMode::Overwrite)
    }

    pub fn output_dir(&self) -> Option<&Path> {
        match &self.mode {
            OutputMode::Overwrite => None,
            OutputMode::Copy(dir) => Some(dir),
        }
    }

    /// Resolve the path the filtered content of `source` is written to.
    ///
    /// In copy mode only the base name of `source` is kept, so nested sources
    /// land flat in the output directory.
    pub fn destination_for(&self, source: &Path) -> DomainResult<PathBuf> {
        match &self.mode {
            OutputMode::Overwrite => Ok(source.to_path_buf()),
            OutputMode::Copy(dir) => source
                .file_name()
                .map(|name| dir.join(name))
                .ok_or_else(|| DomainError::MissingFileName { path: source.to_path_buf() }),
        }
    }
}
