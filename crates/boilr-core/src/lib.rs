//! Boilr Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Boilr
//! web-app boilerplate generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           boilr-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, Catalog, Installer)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     boilr-adapters (Infrastructure)     │
//! │  (LocalFilesystem, NpmInstaller, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │    (Layout, ScaffoldRequest, Plan)      │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boilr_core::{
//!     application::{ScaffoldOptions, ScaffoldService},
//!     domain::{Layout, ScaffoldRequest},
//! };
//!
//! // 1. Build a request
//! let request = ScaffoldRequest::builder(Layout::by_name("fullstack")?)
//!     .project_name("my-app")
//!     .dependencies(["lodash"])
//!     .build()?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(catalog, filesystem, installer);
//! service.scaffold(&request, ScaffoldOptions::default())?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldOptions, ScaffoldReport, ScaffoldService,
        ports::{Filesystem, PackageInstaller, TemplateCatalog},
    };
    pub use crate::domain::{
        EntryStyle, FileRole, Layout, PackageManifest, ProjectPlan, ScaffoldRequest,
        ScaffoldRequestBuilder,
    };
    pub use crate::error::{BoilrError, BoilrResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
