// src/presentation.rs
use std::io::{self, Write};

use minify_files_domain::{BatchReport, CountPolicy, FileOutcome, MinifyConfig};
use minify_files_ports::progress::ProgressSink;
use minify_files_shared_kernel::{ApplicationError, PresentationError, PresentationResult, Result};
use serde::Serialize;

/// One human-readable line per processed file.
pub fn outcome_line(outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Minified { source, destination, .. } => {
            format!("Minified: {} -> {}", source.display(), destination.display())
        }
        FileOutcome::ReadFailed { source, message } | FileOutcome::WriteFailed { source, message, .. } => {
            format!("Error processing file '{}': {message}", source.display())
        }
    }
}

pub fn summary_lines(report: &BatchReport, policy: CountPolicy) -> Vec<String> {
    let mut lines = vec![format!("Successfully minified {} files.", report.summary_count(policy))];
    if !report.is_clean() {
        lines.push(format!("Failed to minify {} files.", report.failed()));
    }
    lines
}

/// Message for a batch that could not start; no `Error:` prefix for an empty folder.
pub fn batch_error_line(err: &ApplicationError) -> String {
    match err {
        ApplicationError::NoFilesFound { .. } => err.to_string(),
        ApplicationError::InputNotFound { .. } | ApplicationError::InputNotDirectory { .. } => {
            format!("Error: {err}")
        }
    }
}

/// Streams text lines to stdout as files are processed.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    policy: CountPolicy,
}

impl ConsoleReporter {
    pub fn new(policy: CountPolicy) -> Self {
        Self { policy }
    }
}

impl ProgressSink for ConsoleReporter {
    fn on_file(&self, outcome: &FileOutcome) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", outcome_line(outcome))?;
        Ok(())
    }

    fn on_complete(&self, report: &BatchReport) -> Result<()> {
        let mut out = io::stdout().lock();
        for line in summary_lines(report, self.policy) {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    config: &'a MinifyConfig,
    count_policy: CountPolicy,
    count: usize,
    attempted: usize,
    succeeded: usize,
    failed: usize,
    outcomes: &'a [FileOutcome],
}

/// Render the whole batch as one pretty-printed JSON document.
pub fn render_json(config: &MinifyConfig, report: &BatchReport, policy: CountPolicy) -> PresentationResult<String> {
    let doc = JsonReport {
        config,
        count_policy: policy,
        count: report.summary_count(policy),
        attempted: report.attempted(),
        succeeded: report.succeeded(),
        failed: report.failed(),
        outcomes: &report.outcomes,
    };
    serde_json::to_string_pretty(&doc).map_err(|e| PresentationError::RenderFailed(e.to_string()))
}
