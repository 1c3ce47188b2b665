//! Declarative project layouts.
//!
//! The original generation of this tool shipped one hard-coded pipeline per
//! directory arrangement. Here a [`Layout`] is a plain data value: the set of
//! directories to create, the ordered file slots to prompt for, and the
//! naming conventions for derived artifacts. Adding a layout means adding an
//! entry to [`LAYOUT_REGISTRY`], not another pipeline.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// How the scaffolder treats files requested for a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// Written verbatim: catalog content if present, empty otherwise.
    Plain,
    /// Like `Plain`, but the filename is normalized to `.js` first.
    Script,
    /// Like `Plain`, but the filename is normalized to `.css` first.
    Stylesheet,
    /// Generates derived artifacts: markup + stylesheet + script + route.
    View,
    /// Partial template fragment; catalog lookup uses the `partials/` prefix.
    Partial,
    /// Generates a schema-definition stub named after the capitalized base.
    Model,
}

/// One prompt/write slot of a layout: a directory key plus a role.
#[derive(Debug, Clone, Copy)]
pub struct FileSlot {
    /// Directory key relative to the project root. `""` means the root itself.
    pub dir: &'static str,
    /// What to do with files requested for this slot.
    pub role: FileRole,
    /// Prefix for template-catalog lookups. The original catalog keys are
    /// uneven (`"app.js"` for server files but `"client/js/app.js"` for
    /// scripts), so the prefix is carried per slot rather than derived.
    pub catalog_prefix: &'static str,
    /// Human-readable prompt label, e.g. "server directory".
    pub label: &'static str,
}

/// Which server-bootstrap template the entry point uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStyle {
    /// Bare Express hello-world listener.
    Minimal,
    /// Full server: static middleware, EJS view engine, body parsing,
    /// database connection, and generated view routes.
    Server,
}

/// A declarative project layout.
///
/// All fields are `'static` data; the two built-in presets live in
/// [`LAYOUT_REGISTRY`].
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub name: &'static str,
    pub description: &'static str,
    /// Directories created under the project root, in order.
    pub directories: &'static [&'static str],
    /// Ordered prompt/write slots.
    pub slots: &'static [FileSlot],
    /// Entry-point path relative to the project root.
    pub entry_point: &'static str,
    pub entry_style: EntryStyle,
    /// Where view markup files live (also the `views` setting of the server).
    pub views_dir: &'static str,
    /// Where derived stylesheets land.
    pub styles_dir: &'static str,
    /// Where derived scripts land.
    pub scripts_dir: &'static str,
    /// Where model stubs land; empty when the layout has no models.
    pub models_dir: &'static str,
    /// Extension stripped from view names (`.ejs`).
    pub view_extension: &'static str,
    /// Dependencies always present in the manifest and the install set.
    /// User-supplied entries add to this set, never replace it.
    pub default_dependencies: &'static [&'static str],
    /// Whether the scaffolder asks for a database name and emits a
    /// connection block in the entry point.
    pub uses_database: bool,
}

impl Layout {
    /// Look up a layout preset by name.
    pub fn by_name(name: &str) -> Result<&'static Layout, DomainError> {
        LAYOUT_REGISTRY
            .iter()
            .find(|l| l.name == name)
            .ok_or_else(|| DomainError::UnknownLayout { name: name.into() })
    }

    /// All slots with the given role, in declaration order.
    pub fn slots_with_role(&self, role: FileRole) -> impl Iterator<Item = &FileSlot> {
        self.slots.iter().filter(move |s| s.role == role)
    }

    /// Whether this layout generates model stubs.
    pub fn has_models(&self) -> bool {
        !self.models_dir.is_empty()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl FromStr for &'static Layout {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::by_name(s)
    }
}

/// Built-in layout presets.
///
/// `basic` is the flat single-directory arrangement; `fullstack` splits the
/// tree into `client/` and `server/` with a Mongo-backed entry point.
pub static LAYOUT_REGISTRY: &[Layout] = &[
    Layout {
        name: "basic",
        description: "Flat Express app: data/public/views under the project root",
        directories: &["data", "public", "views", "views/partials"],
        slots: &[
            FileSlot {
                dir: "",
                role: FileRole::Plain,
                catalog_prefix: "",
                label: "root directory",
            },
            FileSlot {
                dir: "data",
                role: FileRole::Plain,
                catalog_prefix: "data",
                label: "data directory",
            },
            FileSlot {
                dir: "public",
                role: FileRole::Plain,
                catalog_prefix: "public",
                label: "public directory",
            },
            FileSlot {
                dir: "views",
                role: FileRole::Plain,
                catalog_prefix: "views",
                label: "views directory",
            },
        ],
        entry_point: "index.js",
        entry_style: EntryStyle::Minimal,
        views_dir: "views",
        styles_dir: "public",
        scripts_dir: "public",
        models_dir: "",
        view_extension: ".ejs",
        default_dependencies: &["express"],
        uses_database: false,
    },
    Layout {
        name: "fullstack",
        description: "Split client/server app with EJS views and a MongoDB-backed server",
        directories: &[
            "client",
            "client/js",
            "client/css",
            "server",
            "server/views",
            "server/views/partials",
            "models",
        ],
        slots: &[
            FileSlot {
                dir: "server",
                role: FileRole::Plain,
                catalog_prefix: "",
                label: "server directory",
            },
            FileSlot {
                dir: "client",
                role: FileRole::Plain,
                catalog_prefix: "",
                label: "client directory",
            },
            FileSlot {
                dir: "client/js",
                role: FileRole::Script,
                catalog_prefix: "client/js",
                label: "client/js directory",
            },
            FileSlot {
                dir: "client/css",
                role: FileRole::Stylesheet,
                catalog_prefix: "client/css",
                label: "client/css directory",
            },
            FileSlot {
                dir: "server/views",
                role: FileRole::View,
                catalog_prefix: "views",
                label: "server/views directory",
            },
            FileSlot {
                dir: "server/views/partials",
                role: FileRole::Partial,
                catalog_prefix: "partials",
                label: "server/views/partials directory",
            },
            FileSlot {
                dir: "models",
                role: FileRole::Model,
                catalog_prefix: "models",
                label: "models directory",
            },
        ],
        entry_point: "server/index.js",
        entry_style: EntryStyle::Server,
        views_dir: "server/views",
        styles_dir: "client/css",
        scripts_dir: "client/js",
        models_dir: "models",
        view_extension: ".ejs",
        default_dependencies: &["express", "ejs", "mongoose"],
        uses_database: true,
    },
];
