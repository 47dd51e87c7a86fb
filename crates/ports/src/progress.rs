// crates/ports/src/progress.rs
use minify_files_domain::{BatchReport, FileOutcome};
use minify_files_shared_kernel::Result;

pub trait ProgressSink: Send + Sync {
    fn on_file(&self, outcome: &FileOutcome) -> Result<()>;
    fn on_complete(&self, report: &BatchReport) -> Result<()>;
}
