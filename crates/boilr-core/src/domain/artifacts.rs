//! Derived artifact generation.
//!
//! A *derived artifact* is a file created as a side effect of another
//! request: asking for a view `home.ejs` also produces `homeStyles.css`, an
//! empty `homeScript.js`, and a route registration for `/home`. This module
//! is the only generative (non-copy) logic beyond plain template lookup.

use crate::domain::naming::{capitalize, strip_extension};

/// Placeholder stylesheet written for every generated view.
pub const DEFAULT_STYLESHEET: &str = "\nh1 {\n    color: bisque;\n}\n\nbody {\n    background-color: blueviolet;\n}\n";

/// An Express route registration tied to a generated view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSnippet {
    /// URL path, e.g. `/home`.
    pub mount_path: String,
    /// View name passed to `res.render`, e.g. `home`.
    pub view: String,
}

impl RouteSnippet {
    /// Render the registration as JavaScript source.
    pub fn to_source(&self) -> String {
        format!(
            "app.get('{path}', (req, res) => {{\n    res.render('{view}');\n}});",
            path = self.mount_path,
            view = self.view,
        )
    }
}

/// The three files plus route snippet derived from a single view request.
#[derive(Debug, Clone)]
pub struct ViewArtifacts {
    /// The view markup file, written as requested (extension kept).
    pub markup_name: String,
    pub markup: String,
    /// `<base>Styles.css`, with the fixed placeholder content.
    pub stylesheet_name: String,
    pub stylesheet: String,
    /// `<base>Script.js`, empty.
    pub script_name: String,
    pub route: RouteSnippet,
}

/// Generate the derived artifacts for a view filename.
///
/// `view_extension` (`.ejs`) is stripped to obtain the base name; the markup
/// references the derived stylesheet and script through the server's static
/// mounts (`/css/...`, `/js/...`), not through filesystem paths.
pub fn view_artifacts(view_filename: &str, view_extension: &str) -> ViewArtifacts {
    let base = strip_extension(view_filename, view_extension);
    let stylesheet_name = format!("{base}Styles.css");
    let script_name = format!("{base}Script.js");

    let markup = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>I'm {base}</title>
    <link rel="stylesheet" href="/css/{stylesheet_name}">
    <script src="/js/{script_name}" defer></script>
</head>
<body>
    <h1>I'm {base}</h1>
</body>
</html>"#
    );

    ViewArtifacts {
        markup_name: view_filename.to_string(),
        markup,
        stylesheet_name,
        stylesheet: DEFAULT_STYLESHEET.to_string(),
        script_name,
        route: RouteSnippet {
            mount_path: format!("/{base}"),
            view: base.to_string(),
        },
    }
}

/// A generated model stub: the file content plus the `require` line the
/// entry point needs to load it.
#[derive(Debug, Clone)]
pub struct ModelArtifact {
    /// Capitalized schema name, e.g. `User` for `user.js`.
    pub model_name: String,
    pub content: String,
    pub require_line: String,
}

/// Generate a Mongoose schema stub for a model filename.
pub fn model_artifact(model_filename: &str) -> ModelArtifact {
    let model_name = capitalize(strip_extension(model_filename, ".js"));

    let content = format!(
        r#"const mongoose = require('mongoose');

const {name}Schema = new mongoose.Schema({{
    name: {{
        type: String,
        required: true
    }}
}});

const {name} = mongoose.model('{name}', {name}Schema);
module.exports = {name};"#,
        name = model_name,
    );

    let require_line = format!("const {model_name} = require('../models/{model_filename}');");

    ModelArtifact {
        model_name,
        content,
        require_line,
    }
}
