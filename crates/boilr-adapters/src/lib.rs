//! Infrastructure adapters for Boilr.
//!
//! This crate implements the ports defined in `boilr-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;
pub mod filesystem;
pub mod installer;

// Re-export commonly used adapters
pub use catalog::{InMemoryCatalog, JsonCatalog};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::{NpmInstaller, RecordingInstaller};
