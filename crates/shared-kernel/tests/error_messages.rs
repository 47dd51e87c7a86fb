// crates/shared-kernel/tests/error_messages.rs
use std::{io, path::PathBuf};

use minify_files_shared_kernel::{ApplicationError, InfrastructureError, MinifyError, PresentationError};

#[test]
fn application_errors_render_user_messages() {
    let missing = ApplicationError::InputNotFound { path: PathBuf::from("nope") };
    assert_eq!(missing.to_string(), "Input folder 'nope' not found.");

    let empty = ApplicationError::NoFilesFound { path: PathBuf::from("empty") };
    assert_eq!(empty.to_string(), "No files found in 'empty'.");

    let root: MinifyError = empty.into();
    assert_eq!(root.to_string(), "No files found in 'empty'.");
}

#[test]
fn write_errors_name_the_destination() {
    let err = InfrastructureError::FileWrite {
        path: PathBuf::from("out/a.txt"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to write file 'out/a.txt': denied");
}

#[test]
fn presentation_errors_convert_into_the_root_error() {
    let err: MinifyError = PresentationError::RenderFailed("bad float".into()).into();

    assert!(matches!(err, MinifyError::Presentation(_)));
    assert_eq!(err.to_string(), "Presentation error: Failed to render report: bad float");
    assert!(err.as_application().is_none());
}
