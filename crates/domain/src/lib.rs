#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod filter;
pub mod model;
pub mod options;

pub use config::{MinifyConfig, OutputMode};
pub use model::{BatchReport, FileOutcome};
pub use options::{CountPolicy, ReportFormat};
