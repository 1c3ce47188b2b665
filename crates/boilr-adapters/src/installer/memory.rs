//! Recording installer for testing.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use boilr_core::{
    application::{ApplicationError, ports::PackageInstaller},
    error::BoilrResult,
};

/// Test double that records install calls instead of running npm.
#[derive(Debug, Clone, Default)]
pub struct RecordingInstaller {
    calls: Arc<Mutex<Vec<InstallCall>>>,
    fail: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCall {
    pub project_dir: PathBuf,
    pub packages: Vec<String>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// An installer whose every call fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<InstallCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl PackageInstaller for RecordingInstaller {
    fn install(&self, project_dir: &Path, packages: &[String]) -> BoilrResult<()> {
        self.calls.lock().unwrap().push(InstallCall {
            project_dir: project_dir.to_path_buf(),
            packages: packages.to_vec(),
        });

        if self.fail {
            return Err(ApplicationError::InstallFailed {
                command: "npm install".into(),
                reason: "simulated failure".into(),
            }
            .into());
        }
        Ok(())
    }
}
