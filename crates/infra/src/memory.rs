// crates/infra/src/memory.rs
//! In-memory `FileSystem` adapter.
//!
//! Lets a batch run without touching disk, with optional per-path failures
//! for exercising error containment.

use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, PoisonError},
};

use minify_files_ports::filesystem::FileSystem;
use minify_files_shared_kernel::{InfrastructureError, Result};

#[derive(Debug, Default)]
struct State {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
    read_only: BTreeSet<PathBuf>,
}

#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    state: Mutex<State>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory, along with its missing ancestors.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut state = self.lock();
        for ancestor in path.as_ref().ancestors().filter(|a| !a.as_os_str().is_empty()) {
            state.dirs.insert(ancestor.to_path_buf());
        }
    }

    /// Add a file; its parent directory is created implicitly.
    pub fn add_file(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.lock().files.insert(path.to_path_buf(), contents.into());
    }

    /// Make writes to `path` fail with `PermissionDenied`.
    pub fn set_read_only(&self, path: impl AsRef<Path>) {
        self.lock().read_only.insert(path.as_ref().to_path_buf());
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.lock().files.get(path.as_ref()).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("no such file: {}", path.display()))
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let state = self.lock();
        state.dirs.contains(path) || state.files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.lock().dirs.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        if self.lock().files.contains_key(path) {
            return Err(InfrastructureError::FileSystemOperation {
                operation: "create_dir_all".to_string(),
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::AlreadyExists, "a file exists at this path"),
            }
            .into());
        }
        self.add_dir(path);
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let state = self.lock();
        if !state.dirs.contains(dir) {
            return Err(InfrastructureError::FileSystemOperation {
                operation: "read_dir".to_string(),
                path: dir.to_path_buf(),
                source: not_found(dir),
            }
            .into());
        }
        Ok(state.files.keys().filter(|p| p.parent() == Some(dir)).cloned().collect())
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.contents(path).ok_or_else(|| {
            InfrastructureError::FileRead { path: path.to_path_buf(), source: not_found(path) }.into()
        })
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let mut state = self.lock();
        let parent_missing = path.parent().is_some_and(|p| !p.as_os_str().is_empty() && !state.dirs.contains(p));
        if state.read_only.contains(path) || state.dirs.contains(path) || parent_missing {
            let kind = if parent_missing { io::ErrorKind::NotFound } else { io::ErrorKind::PermissionDenied };
            return Err(InfrastructureError::FileWrite {
                path: path.to_path_buf(),
                source: io::Error::new(kind, "write rejected"),
            }
            .into());
        }
        state.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}
