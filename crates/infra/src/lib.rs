// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod memory;
pub mod persistence;

pub use filesystem::StdFileSystem;
pub use memory::MemoryFileSystem;
