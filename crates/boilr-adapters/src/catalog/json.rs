//! Catalog loaded from a user-provided JSON file.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use boilr_core::{
    application::{ApplicationError, ports::TemplateCatalog},
    error::BoilrResult,
};

/// Catalog backed by a flat JSON object: keys are catalog-relative paths,
/// values are file content.
///
/// ```json
/// {
///     "app.js": "const express = require('express');\n",
///     "client/js/util.js": ""
/// }
/// ```
pub struct JsonCatalog {
    entries: HashMap<String, String>,
}

impl JsonCatalog {
    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> BoilrResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ApplicationError::CatalogError {
            reason: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let entries: HashMap<String, String> =
            serde_json::from_str(&raw).map_err(|e| ApplicationError::CatalogError {
                reason: format!("Failed to parse {}: {}", path.display(), e),
            })?;

        info!(
            path = %path.display(),
            entries = entries.len(),
            "Loaded template catalog"
        );
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TemplateCatalog for JsonCatalog {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
