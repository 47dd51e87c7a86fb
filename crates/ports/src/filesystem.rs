// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use minify_files_shared_kernel::Result;

/// Port for the file system capabilities a batch needs.
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Create `path` and any missing parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Top-level regular files of `dir`. Subdirectories and special files are skipped.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replace the content of `path` with `contents`, creating the file if needed.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
}
