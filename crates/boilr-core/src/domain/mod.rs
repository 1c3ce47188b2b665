//! Core domain layer for Boilr.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O and process concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone
//! - **Rich domain model**: Behavior lives in entities, not services

pub mod artifacts;
pub mod entry_point;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod naming;
pub mod plan;
pub mod request;

// Re-exports for convenience
pub use artifacts::{ModelArtifact, RouteSnippet, ViewArtifacts, model_artifact, view_artifacts};
pub use entry_point::EntryPointInputs;
pub use error::{DomainError, ErrorCategory};
pub use layout::{EntryStyle, FileRole, FileSlot, Layout};
pub use manifest::PackageManifest;
pub use naming::{capitalize, normalize_extension, strip_extension};
pub use plan::{DirectoryToCreate, FileToWrite, FsEntry, ProjectPlan};
pub use request::{ScaffoldRequest, ScaffoldRequestBuilder};
