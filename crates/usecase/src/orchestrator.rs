use std::path::Path;

use minify_files_domain::{BatchReport, FileOutcome, MinifyConfig, filter::minify_bytes};
use minify_files_ports::{filesystem::FileSystem, progress::ProgressSink};
use minify_files_shared_kernel::{ApplicationError, ErrorContext, Result};
use tracing::{debug, info, warn};

/// Strips non-printable characters from every top-level file of a folder.
///
/// Only the directory itself is scanned; subdirectories are never entered.
pub struct MinifyFolder<'a> {
    config: MinifyConfig,
    fs: &'a dyn FileSystem,
    sink: Option<&'a dyn ProgressSink>,
}

impl<'a> MinifyFolder<'a> {
    /// Creates the output folder (and missing parents) up front in copy mode.
    ///
    /// Failure to create it is fatal and returned as is.
    pub fn new(config: MinifyConfig, fs: &'a dyn FileSystem) -> Result<Self> {
        if let Some(dir) = config.output_dir() {
            if !fs.exists(dir) {
                fs.create_dir_all(dir)
                    .with_context(|| format!("Failed to create output folder '{}'", dir.display()))?;
                debug!(path = %dir.display(), "created output folder");
            }
        }
        Ok(Self { config, fs, sink: None })
    }

    pub fn with_sink(mut self, sink: &'a dyn ProgressSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn config(&self) -> &MinifyConfig {
        &self.config
    }

    /// Transform every eligible file, in path order.
    ///
    /// A missing input folder or an empty one is an [`ApplicationError`];
    /// per-file failures are recorded in the report and never abort the batch.
    pub fn run(&self) -> Result<BatchReport> {
        let input = &self.config.input_dir;
        if !self.fs.exists(input) {
            return Err(ApplicationError::InputNotFound { path: input.clone() }.into());
        }
        if !self.fs.is_dir(input) {
            return Err(ApplicationError::InputNotDirectory { path: input.clone() }.into());
        }

        let files = self.fs.list_files(input)?;
        if files.is_empty() {
            return Err(ApplicationError::NoFilesFound { path: input.clone() }.into());
        }

        info!(input = %input.display(), files = files.len(), overwrite = self.config.is_overwrite(), "minifying folder");

        let mut report = BatchReport::default();
        for file in &files {
            let outcome = self.minify_file(file);
            self.notify(|sink| sink.on_file(&outcome));
            report.push(outcome);
        }

        info!(succeeded = report.succeeded(), failed = report.failed(), "batch complete");
        self.notify(|sink| sink.on_complete(&report));
        Ok(report)
    }

    /// Read, filter and write a single file. Never fails; errors become outcomes.
    pub fn minify_file(&self, source: &Path) -> FileOutcome {
        let bytes = match self.fs.read(source) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(path = %source.display(), error = %err, "read failed");
                return FileOutcome::ReadFailed { source: source.to_path_buf(), message: err.to_string() };
            }
        };

        let minified = minify_bytes(&bytes);

        let destination = match self.config.destination_for(source) {
            Ok(destination) => destination,
            Err(err) => {
                warn!(path = %source.display(), error = %err, "no destination");
                return FileOutcome::WriteFailed {
                    source: source.to_path_buf(),
                    destination: None,
                    message: err.to_string(),
                };
            }
        };

        if let Err(err) = self.fs.write(&destination, minified.as_bytes()) {
            warn!(path = %source.display(), destination = %destination.display(), error = %err, "write failed");
            return FileOutcome::WriteFailed {
                source: source.to_path_buf(),
                destination: Some(destination),
                message: err.to_string(),
            };
        }

        debug!(
            path = %source.display(),
            destination = %destination.display(),
            removed = bytes.len().saturating_sub(minified.len()),
            "minified"
        );
        FileOutcome::Minified {
            source: source.to_path_buf(),
            destination,
            bytes_in: bytes.len(),
            bytes_out: minified.len(),
        }
    }

    fn notify<F>(&self, f: F)
    where
        F: FnOnce(&dyn ProgressSink) -> Result<()>,
    {
        if let Some(sink) = self.sink {
            if let Err(err) = f(sink) {
                warn!(error = %err, "progress sink failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::{BTreeMap, BTreeSet},
        io,
        path::PathBuf,
        sync::Mutex,
    };

    use minify_files_shared_kernel::{InfrastructureError, MinifyError};

    use super::*;

    #[derive(Default)]
    struct StubFs {
        dirs: Mutex<BTreeSet<PathBuf>>,
        files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
        unwritable: BTreeSet<PathBuf>,
        fail_mkdir: bool,
    }

    impl StubFs {
        fn with_dir(dir: &str) -> Self {
            let fs = Self::default();
            fs.dirs.lock().unwrap().insert(dir.into());
            fs
        }

        fn file(self, path: &str, contents: &[u8]) -> Self {
            self.files.lock().unwrap().insert(path.into(), contents.to_vec());
            self
        }

        fn contents(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(Path::new(path)).cloned()
        }

        fn denied(path: &Path, op: &str) -> MinifyError {
            InfrastructureError::FileSystemOperation {
                operation: op.into(),
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            }
            .into()
        }
    }

    impl FileSystem for StubFs {
        fn exists(&self, path: &Path) -> bool {
            self.is_dir(path) || self.files.lock().unwrap().contains_key(path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.dirs.lock().unwrap().contains(path)
        }

        fn create_dir_all(&self, path: &Path) -> Result<()> {
            if self.fail_mkdir {
                return Err(Self::denied(path, "create_dir_all"));
            }
            self.dirs.lock().unwrap().insert(path.to_path_buf());
            Ok(())
        }

        fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
            Ok(self.files.lock().unwrap().keys().filter(|p| p.parent() == Some(dir)).cloned().collect())
        }

        fn read(&self, path: &Path) -> Result<Vec<u8>> {
            self.contents(&path.to_string_lossy()).ok_or_else(|| Self::denied(path, "read"))
        }

        fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
            if self.unwritable.contains(path) {
                return Err(Self::denied(path, "write"));
            }
            self.files.lock().unwrap().insert(path.to_path_buf(), contents.to_vec());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        files: Mutex<Vec<FileOutcome>>,
        completed: Mutex<Option<usize>>,
    }

    impl ProgressSink for RecordingSink {
        fn on_file(&self, outcome: &FileOutcome) -> Result<()> {
            self.files.lock().unwrap().push(outcome.clone());
            Ok(())
        }

        fn on_complete(&self, report: &BatchReport) -> Result<()> {
            *self.completed.lock().unwrap() = Some(report.attempted());
            Ok(())
        }
    }

    #[test]
    fn overwrite_mode_replaces_files_in_place() {
        let fs = StubFs::with_dir("in").file("in/a.txt", b"Hello\tWorld\x00!\n");
        let usecase = MinifyFolder::new(MinifyConfig::new("in", None), &fs).unwrap();

        let report = usecase.run().expect("run succeeds");

        assert_eq!(report.succeeded(), 1);
        assert_eq!(fs.contents("in/a.txt").unwrap(), b"HelloWorld!\n");
    }

    #[test]
    fn copy_mode_creates_output_folder_and_leaves_sources() {
        let fs = StubFs::with_dir("in").file("in/x.txt", b"caf\xc3\xa9\r\n");
        let config = MinifyConfig::new("in", Some(PathBuf::from("out")));

        let usecase = MinifyFolder::new(config, &fs).unwrap();
        assert!(fs.is_dir(Path::new("out")));

        usecase.run().unwrap();
        assert_eq!(fs.contents("out/x.txt").unwrap(), b"caf\r\n");
        assert_eq!(fs.contents("in/x.txt").unwrap(), b"caf\xc3\xa9\r\n");
    }

    #[test]
    fn output_folder_creation_failure_is_fatal() {
        let fs = StubFs { fail_mkdir: true, ..StubFs::with_dir("in") };
        let result = MinifyFolder::new(MinifyConfig::new("in", Some(PathBuf::from("out"))), &fs);

        let err = result.err().expect("mkdir failure propagates");
        assert!(err.to_string().contains("Failed to create output folder 'out'"));
    }

    #[test]
    fn missing_input_folder_is_reported() {
        let fs = StubFs::default();
        let usecase = MinifyFolder::new(MinifyConfig::new("missing", None), &fs).unwrap();

        let err = usecase.run().unwrap_err();
        assert!(matches!(err.as_application(), Some(ApplicationError::InputNotFound { .. })));
    }

    #[test]
    fn output_folder_is_created_even_when_input_is_missing() {
        let fs = StubFs::default();
        let usecase = MinifyFolder::new(MinifyConfig::new("missing", Some(PathBuf::from("out"))), &fs).unwrap();

        let err = usecase.run().unwrap_err();
        assert!(matches!(err.as_application(), Some(ApplicationError::InputNotFound { .. })));
        assert!(fs.is_dir(Path::new("out")));
        assert!(!fs.exists(Path::new("missing")));
    }

    #[test]
    fn input_that_is_a_file_is_reported() {
        let fs = StubFs::with_dir("in").file("in/a.txt", b"a");
        let usecase = MinifyFolder::new(MinifyConfig::new("in/a.txt", None), &fs).unwrap();

        let err = usecase.run().unwrap_err();
        assert!(matches!(err.as_application(), Some(ApplicationError::InputNotDirectory { .. })));
    }

    #[test]
    fn empty_input_folder_is_reported_after_output_folder_exists() {
        let fs = StubFs::with_dir("in");
        let usecase = MinifyFolder::new(MinifyConfig::new("in", Some(PathBuf::from("out"))), &fs).unwrap();

        let err = usecase.run().unwrap_err();
        assert!(matches!(err.as_application(), Some(ApplicationError::NoFilesFound { .. })));
        assert!(fs.is_dir(Path::new("out")));
        assert!(fs.list_files(Path::new("out")).unwrap().is_empty());
    }

    #[test]
    fn one_unwritable_file_does_not_stop_the_batch() {
        let fs = StubFs {
            unwritable: [PathBuf::from("in/b.txt")].into_iter().collect(),
            ..StubFs::with_dir("in").file("in/a.txt", b"a\t1").file("in/b.txt", b"b\t2").file("in/c.txt", b"c\t3")
        };
        let sink = RecordingSink::default();
        let usecase = MinifyFolder::new(MinifyConfig::new("in", None), &fs).unwrap().with_sink(&sink);

        let report = usecase.run().expect("per-file errors do not fail the batch");

        assert_eq!(report.attempted(), 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(fs.contents("in/a.txt").unwrap(), b"a1");
        assert_eq!(fs.contents("in/b.txt").unwrap(), b"b\t2");
        assert_eq!(fs.contents("in/c.txt").unwrap(), b"c3");

        let failed = report.failures().next().unwrap();
        assert_eq!(failed.source(), Path::new("in/b.txt"));
        assert!(failed.error_message().unwrap().contains("permission denied"));

        assert_eq!(sink.files.lock().unwrap().len(), 3);
        assert_eq!(*sink.completed.lock().unwrap(), Some(3));
    }

    #[test]
    fn read_failure_becomes_an_outcome() {
        let fs = StubFs::with_dir("in");
        let usecase = MinifyFolder::new(MinifyConfig::new("in", None), &fs).unwrap();

        let outcome = usecase.minify_file(Path::new("in/gone.txt"));
        assert!(matches!(outcome, FileOutcome::ReadFailed { .. }));
    }

    #[test]
    fn minified_outcome_records_sizes() {
        let fs = StubFs::with_dir("in").file("in/a.txt", b"\x01\x02ab");
        let usecase = MinifyFolder::new(MinifyConfig::new("in", None), &fs).unwrap();

        let outcome = usecase.minify_file(Path::new("in/a.txt"));
        assert_eq!(
            outcome,
            FileOutcome::Minified {
                source: PathBuf::from("in/a.txt"),
                destination: PathBuf::from("in/a.txt"),
                bytes_in: 4,
                bytes_out: 2,
            }
        );
    }
}
