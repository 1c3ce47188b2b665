//! Project plan: the ordered set of filesystem entries to materialize.

use std::path::{Path, PathBuf};

use crate::domain::artifacts::{model_artifact, view_artifacts};
use crate::domain::entry_point::{self, EntryPointInputs};
use crate::domain::error::DomainError;
use crate::domain::layout::FileRole;
use crate::domain::manifest::PackageManifest;
use crate::domain::naming::normalize_extension;
use crate::domain::request::ScaffoldRequest;

/// Ordered plan of directories and files rooted at the project path.
///
/// Entries are written in plan order. Duplicate paths are allowed by design:
/// when a user-requested file collides with a derived artifact, whichever
/// write executes last wins. That collision behavior is deliberately
/// undefined at the request level and left as-is rather than silently fixed.
#[derive(Debug, Clone)]
pub struct ProjectPlan {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    Directory(DirectoryToCreate),
    File(FileToWrite),
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    /// Path relative to the plan root.
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    /// Path relative to the plan root.
    pub path: PathBuf,
    pub content: String,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl ProjectPlan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    /// Build the full plan for a scaffold request.
    ///
    /// `lookup` resolves template-catalog keys; a `None` result means the
    /// file is written empty (catalog misses are never an error).
    pub fn build(
        request: &ScaffoldRequest,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, DomainError> {
        let layout = request.layout();
        let mut plan = Self::new(request.project_path());

        for dir in layout.directories {
            plan.add_directory(dir);
        }

        let mut routes = Vec::new();
        let mut model_requires = Vec::new();

        for (index, slot) in layout.slots.iter().enumerate() {
            for name in request.files_for_slot(index) {
                match slot.role {
                    FileRole::Plain | FileRole::Partial => {
                        let content = catalog_content(&lookup, slot.catalog_prefix, name);
                        plan.add_file(join_dir(slot.dir, name), content);
                    }
                    FileRole::Script => {
                        let name = normalize_extension(name, ".js");
                        let content = catalog_content(&lookup, slot.catalog_prefix, &name);
                        plan.add_file(join_dir(slot.dir, &name), content);
                    }
                    FileRole::Stylesheet => {
                        let name = normalize_extension(name, ".css");
                        let content = catalog_content(&lookup, slot.catalog_prefix, &name);
                        plan.add_file(join_dir(slot.dir, &name), content);
                    }
                    FileRole::View => {
                        let artifacts = view_artifacts(name, layout.view_extension);
                        plan.add_file(
                            join_dir(layout.views_dir, &artifacts.markup_name),
                            artifacts.markup,
                        );
                        plan.add_file(
                            join_dir(layout.styles_dir, &artifacts.stylesheet_name),
                            artifacts.stylesheet,
                        );
                        plan.add_file(join_dir(layout.scripts_dir, &artifacts.script_name), String::new());
                        routes.push(artifacts.route);
                    }
                    FileRole::Model => {
                        let artifact = model_artifact(name);
                        plan.add_file(join_dir(slot.dir, name), artifact.content);
                        model_requires.push(artifact.require_line);
                    }
                }
            }
        }

        let entry = entry_point::assemble(
            layout.entry_style,
            &EntryPointInputs {
                dependencies: request.dependencies(),
                model_requires,
                routes,
                db_name: request.db_name(),
            },
        );
        plan.add_file(layout.entry_point, entry);

        let manifest = PackageManifest::new(request.project_name(), layout, request.dependencies());
        plan.add_file("package.json", manifest.to_json());

        plan.validate()?;
        Ok(plan)
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries
            .push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    /// Reject absolute entry paths; everything else is acceptable,
    /// including duplicates (last write wins).
    pub fn validate(&self) -> Result<(), DomainError> {
        for entry in &self.entries {
            let path = match entry {
                FsEntry::File(f) => &f.path,
                FsEntry::Directory(d) => &d.path,
            };
            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Catalog key for a slot file: bare name at the root prefix, otherwise
/// `prefix/name`.
fn catalog_content(
    lookup: &impl Fn(&str) -> Option<String>,
    prefix: &str,
    name: &str,
) -> String {
    let key = if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    };
    lookup(&key).unwrap_or_default()
}

fn join_dir(dir: &str, name: &str) -> PathBuf {
    if dir.is_empty() {
        PathBuf::from(name)
    } else {
        Path::new(dir).join(name)
    }
}
