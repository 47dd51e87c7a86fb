//! Strip non-printable characters from every top-level file of a folder.
//!
//! The binary is a thin shell over [`bootstrap::execute`], which wires the
//! `std::fs` adapter and the console reporter into the minify use case.

#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod cli;
pub mod logging;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
