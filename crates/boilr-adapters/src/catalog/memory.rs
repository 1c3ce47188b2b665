//! In-memory template catalog with built-in starters.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use boilr_core::application::ports::TemplateCatalog;

/// Thread-safe in-memory catalog.
#[derive(Clone)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a catalog seeded with the built-in starters.
    pub fn with_builtin() -> Self {
        let catalog = Self::new();
        for (key, content) in BUILTIN_STARTERS {
            catalog.insert(*key, *content);
        }
        catalog
    }

    /// Insert or replace an entry.
    pub fn insert(&self, key: impl Into<String>, content: impl Into<String>) {
        self.inner
            .write()
            .unwrap()
            .insert(key.into(), content.into());
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateCatalog for InMemoryCatalog {
    fn lookup(&self, key: &str) -> Option<String> {
        self.inner.read().ok()?.get(key).cloned()
    }
}

/// Starters shipped with the binary. Keys follow the slot catalog prefixes:
/// bare names for server-level files, directory-prefixed names elsewhere.
const BUILTIN_STARTERS: &[(&str, &str)] = &[
    (
        "app.js",
        "const express = require('express');\nconst router = express.Router();\n\nmodule.exports = router;\n",
    ),
    (
        ".gitignore",
        "node_modules/\n.env\n",
    ),
    (
        "partials/head.ejs",
        "<meta charset=\"UTF-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    ),
    (
        "partials/footer.ejs",
        "<footer>\n    <p>&copy; <%= new Date().getFullYear() %></p>\n</footer>\n",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_starters() {
        let catalog = InMemoryCatalog::with_builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.lookup("app.js").unwrap().contains("express.Router()"));
        assert!(catalog.lookup("partials/head.ejs").is_some());
    }

    #[test]
    fn lookup_miss_returns_none() {
        let catalog = InMemoryCatalog::with_builtin();
        assert_eq!(catalog.lookup("no/such/key.js"), None);
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let catalog = InMemoryCatalog::new();
        catalog.insert("app.js", "first");
        catalog.insert("app.js", "second");
        assert_eq!(catalog.lookup("app.js").as_deref(), Some("second"));
    }
}
