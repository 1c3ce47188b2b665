//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Build the project plan from the request
//! 2. Write directories and files to the filesystem
//! 3. Install dependencies
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{Filesystem, PackageInstaller, TemplateCatalog},
    domain::{FsEntry, PackageManifest, ProjectPlan, ScaffoldRequest},
    error::BoilrResult,
};

/// Knobs for a single scaffold run.
#[derive(Debug, Clone, Copy)]
pub struct ScaffoldOptions {
    /// Run the package installer after writing the tree.
    pub install: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self { install: true }
    }
}

/// What a scaffold run produced.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    pub directories_created: usize,
    pub files_written: usize,
    /// `true` when the installer ran and succeeded.
    pub installed: bool,
    /// Present when the installer ran and failed. The scaffold itself is
    /// complete; this is surfaced as a warning.
    pub install_warning: Option<String>,
}

/// Main scaffolding service.
///
/// Orchestrates the plan-build, write, and install workflow.
pub struct ScaffoldService {
    catalog: Box<dyn TemplateCatalog>,
    filesystem: Box<dyn Filesystem>,
    installer: Box<dyn PackageInstaller>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        catalog: Box<dyn TemplateCatalog>,
        filesystem: Box<dyn Filesystem>,
        installer: Box<dyn PackageInstaller>,
    ) -> Self {
        Self {
            catalog,
            filesystem,
            installer,
        }
    }

    /// Build the project plan without touching the filesystem.
    ///
    /// Used for dry runs and as the first step of [`scaffold`](Self::scaffold).
    pub fn plan(&self, request: &ScaffoldRequest) -> BoilrResult<ProjectPlan> {
        let plan = ProjectPlan::build(request, |key| self.catalog.lookup(key))?;
        Ok(plan)
    }

    /// Scaffold a project.
    ///
    /// Re-running against an existing directory is allowed: directories are
    /// created with create-if-missing semantics and files are rewritten to
    /// their generated content. There is no rollback; everything written
    /// before a failure stays on disk.
    #[instrument(
        skip_all,
        fields(
            project = %request.project_name(),
            layout = %request.layout(),
        )
    )]
    pub fn scaffold(
        &self,
        request: &ScaffoldRequest,
        options: ScaffoldOptions,
    ) -> BoilrResult<ScaffoldReport> {
        info!("Scaffolding {} project", request.layout());

        let plan = self.plan(request)?;
        let mut report = self.write_plan(&plan)?;

        if options.install {
            self.install(request, &mut report);
        } else {
            info!("Skipping dependency installation");
        }

        info!(
            directories = report.directories_created,
            files = report.files_written,
            "Scaffold completed"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write all entries of the plan, in plan order.
    fn write_plan(&self, plan: &ProjectPlan) -> BoilrResult<ScaffoldReport> {
        let root = plan.root();
        if self.filesystem.exists(root) {
            info!(path = %root.display(), "Target directory exists, reusing it");
        }
        self.filesystem.create_dir_all(root)?;

        let mut report = ScaffoldReport::default();
        for entry in plan.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&root.join(&dir.path))?;
                    report.directories_created += 1;
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                    report.files_written += 1;
                }
            }
        }
        Ok(report)
    }

    /// Run the installer. Failures are logged and recorded on the report,
    /// never propagated: the written tree is already useful on its own.
    fn install(&self, request: &ScaffoldRequest, report: &mut ScaffoldReport) {
        let manifest = PackageManifest::new(
            request.project_name(),
            request.layout(),
            request.dependencies(),
        );
        let packages = manifest.install_set(request.layout(), request.dependencies());

        info!(count = packages.len(), "Installing dependencies");
        match self.installer.install(&request.project_path(), &packages) {
            Ok(()) => report.installed = true,
            Err(e) => {
                warn!(error = %e, "Dependency installation failed, project files are intact");
                report.install_warning = Some(e.to_string());
            }
        }
    }
}
