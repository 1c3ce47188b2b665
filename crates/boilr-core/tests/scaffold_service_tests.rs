//! Service-level tests for boilr-core.
//!
//! The adapters crate provides the production implementations; these tests
//! use small in-process doubles so the core crate stays self-contained.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use boilr_core::application::{
    ApplicationError, ScaffoldOptions, ScaffoldService,
    ports::{Filesystem, PackageInstaller, TemplateCatalog},
};
use boilr_core::domain::{Layout, ScaffoldRequest};
use boilr_core::error::BoilrResult;

#[derive(Default, Clone)]
struct FakeFilesystem {
    state: Arc<Mutex<FsState>>,
}

#[derive(Default)]
struct FsState {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl FakeFilesystem {
    fn read(&self, path: &str) -> Option<String> {
        self.state.lock().unwrap().files.get(Path::new(path)).cloned()
    }

    fn has_dir(&self, path: &str) -> bool {
        self.state.lock().unwrap().dirs.contains(Path::new(path))
    }
}

impl Filesystem for FakeFilesystem {
    fn create_dir_all(&self, path: &Path) -> BoilrResult<()> {
        self.state.lock().unwrap().dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> BoilrResult<()> {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.dirs.contains(path) || state.files.contains_key(path)
    }
}

struct FakeCatalog(BTreeMap<String, String>);

impl TemplateCatalog for FakeCatalog {
    fn lookup(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

#[derive(Default, Clone)]
struct RecordingInstaller {
    calls: Arc<Mutex<Vec<(PathBuf, Vec<String>)>>>,
    fail: bool,
}

impl PackageInstaller for RecordingInstaller {
    fn install(&self, project_dir: &Path, packages: &[String]) -> BoilrResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((project_dir.to_path_buf(), packages.to_vec()));
        if self.fail {
            return Err(ApplicationError::InstallFailed {
                command: "npm install".into(),
                reason: "exit status 1".into(),
            }
            .into());
        }
        Ok(())
    }
}

fn service(
    catalog: BTreeMap<String, String>,
    fs: FakeFilesystem,
    installer: RecordingInstaller,
) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(FakeCatalog(catalog)),
        Box::new(fs),
        Box::new(installer),
    )
}

fn fullstack_request(root: &str) -> ScaffoldRequest {
    let layout = Layout::by_name("fullstack").unwrap();
    let views = layout.slots.iter().position(|s| s.dir == "server/views").unwrap();
    let server = layout.slots.iter().position(|s| s.dir == "server").unwrap();
    let models = layout.slots.iter().position(|s| s.dir == "models").unwrap();

    ScaffoldRequest::builder(layout)
        .project_name("demo")
        .root_dir(root)
        .dependencies(["lodash"])
        .files_for_slot(server, ["app.js"])
        .files_for_slot(views, ["index.ejs"])
        .files_for_slot(models, ["user.js"])
        .db_name("demo_db")
        .build()
        .unwrap()
}

#[test]
fn scaffold_writes_full_tree() {
    let fs = FakeFilesystem::default();
    let installer = RecordingInstaller::default();
    let mut catalog = BTreeMap::new();
    catalog.insert("app.js".to_string(), "// starter app".to_string());

    let svc = service(catalog, fs.clone(), installer);
    let report = svc
        .scaffold(&fullstack_request("/work"), ScaffoldOptions { install: false })
        .unwrap();

    assert!(fs.has_dir("/work/demo/server/views/partials"));
    assert!(fs.has_dir("/work/demo/client/css"));
    assert_eq!(fs.read("/work/demo/server/app.js").unwrap(), "// starter app");
    assert!(fs.read("/work/demo/server/views/index.ejs").is_some());
    assert!(fs.read("/work/demo/client/css/indexStyles.css").is_some());
    assert_eq!(fs.read("/work/demo/client/js/indexScript.js").unwrap(), "");

    let entry = fs.read("/work/demo/server/index.js").unwrap();
    assert!(entry.contains("const lodash = require('lodash');"));
    assert!(entry.contains("const User = require('../models/user.js');"));
    assert!(entry.contains("app.get('/index'"));
    assert!(entry.contains("mongodb://localhost:27017/demo_db"));

    let manifest = fs.read("/work/demo/package.json").unwrap();
    assert!(manifest.contains("\"mongoose\": \"*\""));
    assert!(manifest.contains("\"lodash\": \"*\""));

    assert!(report.files_written >= 6);
    assert!(!report.installed);
}

#[test]
fn scaffold_runs_installer_in_project_dir() {
    let fs = FakeFilesystem::default();
    let installer = RecordingInstaller::default();
    let svc = service(BTreeMap::new(), fs, installer.clone());

    let report = svc
        .scaffold(&fullstack_request("/work"), ScaffoldOptions::default())
        .unwrap();

    assert!(report.installed);
    let calls = installer.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (dir, packages) = &calls[0];
    assert_eq!(dir, Path::new("/work/demo"));
    assert_eq!(packages, &["express", "ejs", "mongoose", "lodash"]);
}

#[test]
fn install_failure_is_a_warning_not_an_error() {
    let fs = FakeFilesystem::default();
    let installer = RecordingInstaller {
        fail: true,
        ..Default::default()
    };
    let svc = service(BTreeMap::new(), fs.clone(), installer);

    let report = svc
        .scaffold(&fullstack_request("/work"), ScaffoldOptions::default())
        .unwrap();

    assert!(!report.installed);
    assert!(report.install_warning.is_some());
    // The tree was still written
    assert!(fs.read("/work/demo/package.json").is_some());
}

#[test]
fn scaffold_rerun_is_idempotent() {
    let fs = FakeFilesystem::default();
    let svc = service(BTreeMap::new(), fs.clone(), RecordingInstaller::default());
    let request = fullstack_request("/work");
    let options = ScaffoldOptions { install: false };

    let first = svc.scaffold(&request, options).unwrap();
    let entry_before = fs.read("/work/demo/server/index.js").unwrap();

    let second = svc.scaffold(&request, options).unwrap();
    let entry_after = fs.read("/work/demo/server/index.js").unwrap();

    assert_eq!(first.files_written, second.files_written);
    assert_eq!(entry_before, entry_after);
}

#[test]
fn plan_does_not_touch_filesystem() {
    let fs = FakeFilesystem::default();
    let svc = service(BTreeMap::new(), fs.clone(), RecordingInstaller::default());

    let plan = svc.plan(&fullstack_request("/work")).unwrap();
    assert!(plan.entry_count() > 0);
    assert!(fs.state.lock().unwrap().files.is_empty());
    assert!(fs.state.lock().unwrap().dirs.is_empty());
}
