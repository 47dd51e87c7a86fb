//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: listing, reading and writing files
//! - [`progress`]: reporting per-file and batch results as they happen
//!
//! These ports keep the use case independent of `std::fs` and of the console.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod progress;
