// crates/infra/src/filesystem.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use minify_files_ports::filesystem::FileSystem;
use minify_files_shared_kernel::{InfrastructureError, Result};
use tracing::warn;

use crate::persistence::{FileReader, FileWriter};

/// `FileSystem` adapter backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl StdFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|source| {
            InfrastructureError::FileSystemOperation {
                operation: "create_dir_all".to_string(),
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|source| InfrastructureError::FileSystemOperation {
            operation: "read_dir".to_string(),
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(dir = %dir.display(), error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();
            if is_regular_file(&path) {
                files.push(path);
            }
        }

        // Stable, platform-aware order so repeated runs print the same report.
        files.sort_by_cached_key(|p| sort_key(p));
        Ok(files)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        FileReader::read_to_end(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source }.into())
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        FileWriter::replace(path, contents)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source }.into())
    }
}

// Follows symlinks: a link to a regular file counts, a link to a directory
// or a dangling link does not.
fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

#[cfg(windows)]
fn sort_key(p: &Path) -> String {
    p.to_string_lossy().to_lowercase()
}

#[cfg(not(windows))]
fn sort_key(p: &Path) -> PathBuf {
    p.to_path_buf()
}
