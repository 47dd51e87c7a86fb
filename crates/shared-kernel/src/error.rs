// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum MinifyError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<MinifyError>,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, MinifyError>;

impl MinifyError {
    /// The batch-level application error behind this error, looking through context layers.
    pub fn as_application(&self) -> Option<&ApplicationError> {
        match self {
            Self::Application(err) => Some(err),
            Self::Context { source, .. } => source.as_application(),
            _ => None,
        }
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Path has no file name: '{}'", .path.display())]
    MissingFileName { path: PathBuf },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
///
/// These are the expected batch failures: they are reported to the user and
/// turned into a failing exit status, never a crash.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Input folder '{}' not found.", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Input folder '{}' is not a directory.", .path.display())]
    InputNotDirectory { path: PathBuf },

    #[error("No files found in '{}'.", .path.display())]
    NoFilesFound { path: PathBuf },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{}': {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File system operation failed: {operation} on '{}': {source}", .path.display())]
    FileSystemOperation {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to render report: {0}")]
    RenderFailed(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for MinifyError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<MinifyError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| MinifyError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| MinifyError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
