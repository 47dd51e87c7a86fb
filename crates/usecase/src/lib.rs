//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: minify every top-level file of a folder
//!
//! Use cases depend on the domain and on ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::MinifyFolder;
