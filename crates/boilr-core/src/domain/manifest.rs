//! `package.json` manifest generation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::layout::Layout;

/// Structured package descriptor written to the project root.
///
/// Serialized with `serde_json::to_string_pretty`; field order follows the
/// struct declaration. Dependency versions are all `"*"` — pinning is the
/// package manager's job, not the scaffolder's.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    pub scripts: BTreeMap<String, String>,
    pub dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
    pub author: String,
    pub license: String,
}

impl PackageManifest {
    /// Build the manifest for a project.
    ///
    /// The layout's default dependencies are always present; user entries
    /// add to the set and cannot remove or replace a default's presence.
    pub fn new(project_name: &str, layout: &Layout, user_dependencies: &[String]) -> Self {
        let entry = layout.entry_point;

        let mut scripts = BTreeMap::new();
        scripts.insert("start".into(), format!("node {entry}"));
        scripts.insert("dev".into(), format!("nodemon {entry}"));

        let mut dependencies = BTreeMap::new();
        for dep in layout.default_dependencies {
            dependencies.insert((*dep).to_string(), "*".to_string());
        }
        for dep in user_dependencies {
            dependencies.insert(dep.clone(), "*".to_string());
        }

        let mut dev_dependencies = BTreeMap::new();
        dev_dependencies.insert("nodemon".into(), "^2.0.12".into());

        Self {
            name: project_name.to_string(),
            version: "1.0.0".into(),
            description: "Project".into(),
            main: entry.to_string(),
            scripts,
            dependencies,
            dev_dependencies,
            author: String::new(),
            license: "ISC".into(),
        }
    }

    /// The full set of packages to install: defaults then user entries, with
    /// user duplicates of defaults dropped.
    pub fn install_set(&self, layout: &Layout, user_dependencies: &[String]) -> Vec<String> {
        let mut set: Vec<String> = layout
            .default_dependencies
            .iter()
            .map(|d| (*d).to_string())
            .collect();
        for dep in user_dependencies {
            if !set.contains(dep) {
                set.push(dep.clone());
            }
        }
        set
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        // PackageManifest contains only maps and strings; serialization
        // cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
