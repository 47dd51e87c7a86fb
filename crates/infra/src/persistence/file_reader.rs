use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Read the entire file into memory. The handle is closed before returning.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let file = Self::open(path)?;
        let capacity = file.metadata().ok().and_then(|m| usize::try_from(m.len()).ok()).unwrap_or(0);
        let mut buf = Vec::with_capacity(capacity);
        BufReader::new(file).read_to_end(&mut buf)?;
        Ok(buf)
    }
}
