// crates/shared-kernel/tests/error_context.rs
use std::io;

use minify_files_shared_kernel::{ApplicationError, ErrorContext, MinifyError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(MinifyError::from)
        .context("writing report")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("writing report"));
    assert!(display.contains("Output error:"));
    assert!(display.contains("root-io"));
}

#[test]
fn application_error_is_found_through_context() {
    let err: std::result::Result<(), _> =
        Err(ApplicationError::NoFilesFound { path: "in".into() });
    let err = err.with_context(|| "running batch".to_string()).unwrap_err();

    assert!(matches!(err.as_application(), Some(ApplicationError::NoFilesFound { .. })));
}
