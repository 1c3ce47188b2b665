//! npm installer adapter.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use boilr_core::{
    application::{ApplicationError, ports::PackageInstaller},
    error::BoilrResult,
};

/// Installs packages by spawning `npm install` inside the project directory.
///
/// The working directory is set on the child process only; the adapter never
/// changes the process-wide current directory.
#[derive(Debug, Clone, Copy)]
pub struct NpmInstaller;

impl NpmInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageInstaller for NpmInstaller {
    fn install(&self, project_dir: &Path, packages: &[String]) -> BoilrResult<()> {
        if packages.is_empty() {
            debug!("No packages to install");
            return Ok(());
        }

        let command_line = format!("npm install {}", packages.join(" "));
        info!(dir = %project_dir.display(), command = %command_line, "Running installer");

        let output = Command::new("npm")
            .arg("install")
            .args(packages)
            .current_dir(project_dir)
            .output()
            .map_err(|e| ApplicationError::InstallFailed {
                command: command_line.clone(),
                reason: format!("Failed to spawn npm: {e}"),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stdout.trim().is_empty() {
            debug!(stdout = %stdout.trim(), "npm output");
        }
        if !stderr.trim().is_empty() {
            debug!(stderr = %stderr.trim(), "npm diagnostics");
        }

        if !output.status.success() {
            return Err(ApplicationError::InstallFailed {
                command: command_line,
                reason: format!("npm exited with {}", output.status),
            }
            .into());
        }

        info!(count = packages.len(), "Packages installed");
        Ok(())
    }
}
