//! End-to-end scaffolding against a real temporary directory.

use std::path::Path;

use boilr_adapters::{InMemoryCatalog, LocalFilesystem, MemoryFilesystem, RecordingInstaller};
use boilr_core::{
    application::{ScaffoldOptions, ScaffoldService, ports::Filesystem as _},
    domain::{Layout, ScaffoldRequest},
};

fn slot(layout: &Layout, dir: &str) -> usize {
    layout.slots.iter().position(|s| s.dir == dir).unwrap()
}

fn build_service(installer: RecordingInstaller) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(InMemoryCatalog::with_builtin()),
        Box::new(LocalFilesystem::new()),
        Box::new(installer),
    )
}

fn read(root: &Path, rel: &str) -> String {
    std::fs::read_to_string(root.join(rel)).unwrap_or_else(|e| panic!("read {rel}: {e}"))
}

#[test]
fn fullstack_scaffold_writes_expected_tree() {
    let tmp = tempfile::tempdir().unwrap();
    let layout = Layout::by_name("fullstack").unwrap();

    let request = ScaffoldRequest::builder(layout)
        .project_name("demo")
        .root_dir(tmp.path())
        .files_for_slot(slot(layout, "server"), ["app.js"])
        .files_for_slot(slot(layout, "server/views"), ["index.ejs"])
        .files_for_slot(slot(layout, "models"), ["user.js"])
        .build()
        .unwrap();

    let service = build_service(RecordingInstaller::new());
    let report = service
        .scaffold(&request, ScaffoldOptions { install: false })
        .unwrap();
    assert!(report.files_written >= 6);

    let root = tmp.path().join("demo");
    assert!(root.join("server/views/partials").is_dir());
    assert!(root.join("client/js").is_dir());
    assert!(root.join("models").is_dir());

    // Builtin starter content for app.js
    assert!(read(&root, "server/app.js").contains("express.Router()"));

    // Derived view artifacts
    assert!(read(&root, "server/views/index.ejs").contains("I'm index"));
    assert!(read(&root, "client/css/indexStyles.css").contains("bisque"));
    assert_eq!(read(&root, "client/js/indexScript.js"), "");

    // Entry point wires models and routes together
    let entry = read(&root, "server/index.js");
    assert!(entry.contains("const User = require('../models/user.js');"));
    assert!(entry.contains("app.get('/index'"));
    assert!(entry.contains("mongodb://localhost:27017/app"));

    // Manifest
    let manifest: serde_json::Value =
        serde_json::from_str(&read(&root, "package.json")).unwrap();
    assert_eq!(manifest["name"], "demo");
    assert_eq!(manifest["main"], "server/index.js");
    assert_eq!(manifest["dependencies"]["mongoose"], "*");
}

#[test]
fn basic_scaffold_writes_flat_tree() {
    let tmp = tempfile::tempdir().unwrap();
    let layout = Layout::by_name("basic").unwrap();

    let request = ScaffoldRequest::builder(layout)
        .project_name("site")
        .root_dir(tmp.path())
        .dependencies(["morgan"])
        .files_for_slot(slot(layout, "views"), ["home.ejs"])
        .build()
        .unwrap();

    let service = build_service(RecordingInstaller::new());
    service
        .scaffold(&request, ScaffoldOptions { install: false })
        .unwrap();

    let root = tmp.path().join("site");
    assert!(root.join("data").is_dir());
    assert!(root.join("public").is_dir());
    assert!(root.join("views/partials").is_dir());
    assert!(root.join("views/home.ejs").is_file());

    let entry = read(&root, "index.js");
    assert!(entry.contains("const morgan = require('morgan');"));
    assert!(entry.contains("Hello, world!"));
    // Minimal entry has no database block
    assert!(!entry.contains("mongoose"));

    let manifest: serde_json::Value =
        serde_json::from_str(&read(&root, "package.json")).unwrap();
    assert_eq!(manifest["main"], "index.js");
    assert_eq!(manifest["dependencies"]["express"], "*");
    assert_eq!(manifest["dependencies"]["morgan"], "*");
    assert!(manifest["dependencies"].get("mongoose").is_none());
}

#[test]
fn rerun_overwrites_generated_files_in_place() {
    let tmp = tempfile::tempdir().unwrap();
    let layout = Layout::by_name("fullstack").unwrap();
    let request = ScaffoldRequest::builder(layout)
        .project_name("demo")
        .root_dir(tmp.path())
        .build()
        .unwrap();

    let service = build_service(RecordingInstaller::new());
    let options = ScaffoldOptions { install: false };
    service.scaffold(&request, options).unwrap();

    // Simulate user edits, then re-run
    let entry_path = tmp.path().join("demo/server/index.js");
    std::fs::write(&entry_path, "edited").unwrap();
    service.scaffold(&request, options).unwrap();

    let entry = std::fs::read_to_string(&entry_path).unwrap();
    assert_ne!(entry, "edited");
    assert!(entry.contains("process.env.PORT || 3000"));
}

#[test]
fn installer_receives_project_dir_and_merged_packages() {
    let tmp = tempfile::tempdir().unwrap();
    let layout = Layout::by_name("fullstack").unwrap();
    let request = ScaffoldRequest::builder(layout)
        .project_name("demo")
        .root_dir(tmp.path())
        .dependencies(["lodash", "ejs"])
        .build()
        .unwrap();

    let installer = RecordingInstaller::new();
    let service = build_service(installer.clone());
    let report = service
        .scaffold(&request, ScaffoldOptions::default())
        .unwrap();
    assert!(report.installed);

    let calls = installer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].project_dir, tmp.path().join("demo"));
    assert_eq!(calls[0].packages, ["express", "ejs", "mongoose", "lodash"]);
}

#[test]
fn memory_filesystem_backs_a_full_scaffold() {
    let layout = Layout::by_name("fullstack").unwrap();
    let request = ScaffoldRequest::builder(layout)
        .project_name("demo")
        .root_dir("/virtual")
        .files_for_slot(slot(layout, "server/views"), ["home.ejs"])
        .build()
        .unwrap();

    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(
        Box::new(InMemoryCatalog::with_builtin()),
        Box::new(fs.clone()),
        Box::new(RecordingInstaller::new()),
    );
    service
        .scaffold(&request, ScaffoldOptions { install: false })
        .unwrap();

    assert!(fs.exists(Path::new("/virtual/demo/server/views/partials")));
    let markup = fs
        .read_file(Path::new("/virtual/demo/server/views/home.ejs"))
        .unwrap();
    assert!(markup.contains("homeStyles.css"));
    assert!(fs
        .read_file(Path::new("/virtual/demo/client/css/homeStyles.css"))
        .is_some());
}

#[test]
fn install_failure_leaves_tree_and_reports_warning() {
    let tmp = tempfile::tempdir().unwrap();
    let layout = Layout::by_name("basic").unwrap();
    let request = ScaffoldRequest::builder(layout)
        .project_name("site")
        .root_dir(tmp.path())
        .build()
        .unwrap();

    let service = build_service(RecordingInstaller::failing());
    let report = service
        .scaffold(&request, ScaffoldOptions::default())
        .unwrap();

    assert!(!report.installed);
    assert!(report.install_warning.is_some());
    assert!(tmp.path().join("site/package.json").is_file());
}
