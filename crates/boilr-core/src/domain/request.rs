//! Scaffold request: the collected, cleaned user input.

use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;
use crate::domain::layout::Layout;

/// A single scaffolding run's input, built once from collected answers and
/// consumed synchronously by the scaffold service.
///
/// ## Invariants (enforced at construction)
///
/// - Filenames and dependency names are trimmed; empty entries are dropped.
/// - Dependency insertion order is preserved — it drives the order of
///   generated `require` statements.
/// - The project name is non-empty, is not a dotfile, and contains no path
///   separators.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    project_name: String,
    root_dir: PathBuf,
    layout: &'static Layout,
    dependencies: Vec<String>,
    /// Requested files per slot, parallel to `layout.slots`.
    files: Vec<Vec<String>>,
    db_name: Option<String>,
}

impl ScaffoldRequest {
    pub fn builder(layout: &'static Layout) -> ScaffoldRequestBuilder {
        ScaffoldRequestBuilder::new(layout)
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Target project directory: `root_dir/project_name`.
    pub fn project_path(&self) -> PathBuf {
        self.root_dir.join(&self.project_name)
    }

    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    /// User-supplied dependencies, in insertion order.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Files requested for the slot at `index` (parallel to `layout.slots`).
    pub fn files_for_slot(&self, index: usize) -> &[String] {
        self.files.get(index).map_or(&[], Vec::as_slice)
    }

    pub fn db_name(&self) -> Option<&str> {
        self.db_name.as_deref()
    }
}

/// Builder that performs the trimming/dropping cleanup on every input.
#[derive(Debug)]
pub struct ScaffoldRequestBuilder {
    project_name: String,
    root_dir: PathBuf,
    layout: &'static Layout,
    dependencies: Vec<String>,
    files: Vec<Vec<String>>,
    db_name: Option<String>,
}

impl ScaffoldRequestBuilder {
    fn new(layout: &'static Layout) -> Self {
        Self {
            project_name: String::new(),
            root_dir: PathBuf::from("."),
            layout,
            dependencies: Vec::new(),
            files: vec![Vec::new(); layout.slots.len()],
            db_name: None,
        }
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into().trim().to_string();
        self
    }

    pub fn root_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.root_dir = dir.into();
        self
    }

    /// Add dependencies, trimming each and dropping empties. Order is kept.
    pub fn dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dependencies.extend(clean_names(deps));
        self
    }

    /// Set the requested files for the slot at `index`.
    ///
    /// Out-of-range indices are ignored; the layout defines how many slots
    /// exist and callers iterate `layout.slots` to produce them.
    pub fn files_for_slot<I, S>(mut self, index: usize, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(slot) = self.files.get_mut(index) {
            *slot = clean_names(names);
        }
        self
    }

    pub fn db_name(mut self, name: impl AsRef<str>) -> Self {
        let name = name.as_ref().trim();
        self.db_name = (!name.is_empty()).then(|| name.to_string());
        self
    }

    pub fn build(self) -> Result<ScaffoldRequest, DomainError> {
        validate_project_name(&self.project_name)?;

        Ok(ScaffoldRequest {
            project_name: self.project_name,
            root_dir: self.root_dir,
            layout: self.layout,
            dependencies: self.dependencies,
            files: self.files,
            db_name: self.db_name,
        })
    }
}

/// Trim every name and drop the empties, preserving order.
fn clean_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|n| n.as_ref().trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

fn validate_project_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}
