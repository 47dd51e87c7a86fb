// crates/infra/src/persistence/file_writer.rs
use std::{fs::File, io::{BufWriter, Write}, path::Path};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`, truncating any existing content.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Replace the content of `path` with `data` and flush before returning.
    ///
    /// The file is truncated and rewritten in place, so a source file being
    /// overwritten keeps its inode and permissions.
    pub fn replace<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let mut w = Self::create(path)?;
        w.write_all(data)?;
        w.flush()
    }
}
