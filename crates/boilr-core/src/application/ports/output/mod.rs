//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `boilr-adapters` crate provides implementations.

use std::path::Path;

use crate::error::BoilrResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `boilr_adapters::filesystem::LocalFilesystem` (production)
/// - `boilr_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> BoilrResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> BoilrResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for starter-content lookup.
///
/// Keys are catalog-relative paths like `app.js` or `client/js/util.js`.
/// A miss is not an error: the scaffolder writes an empty file instead.
///
/// Implemented by:
/// - `boilr_adapters::catalog::InMemoryCatalog` (built-in starters)
/// - `boilr_adapters::catalog::JsonCatalog` (user-provided catalog file)
pub trait TemplateCatalog: Send + Sync {
    /// Look up starter content for a key.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Port for installing project dependencies.
///
/// Implemented by:
/// - `boilr_adapters::installer::NpmInstaller` (production)
/// - `boilr_adapters::installer::RecordingInstaller` (testing)
pub trait PackageInstaller: Send + Sync {
    /// Install `packages` with the package manager, running inside
    /// `project_dir`. The working directory is passed explicitly; the
    /// installer must not mutate the process-wide current directory.
    fn install(&self, project_dir: &Path, packages: &[String]) -> BoilrResult<()>;
}
