//! Server entry-point assembly.
//!
//! The entry point is built by string concatenation only: a fixed bootstrap
//! template, per-dependency `require` lines, and the generated route
//! snippets. No attempt is made to validate that the resulting JavaScript is
//! syntactically distinct or conflict-free.

use crate::domain::artifacts::RouteSnippet;
use crate::domain::layout::EntryStyle;

/// Everything the entry-point generator needs beyond the layout itself.
#[derive(Debug, Default)]
pub struct EntryPointInputs<'a> {
    /// User-supplied dependencies, in insertion order.
    pub dependencies: &'a [String],
    /// `require` lines for generated models.
    pub model_requires: Vec<String>,
    /// Route registrations for generated views.
    pub routes: Vec<RouteSnippet>,
    /// Database name for the connection block (Server style only).
    pub db_name: Option<&'a str>,
}

/// Assemble the entry-point source for the given style.
pub fn assemble(style: EntryStyle, inputs: &EntryPointInputs<'_>) -> String {
    match style {
        EntryStyle::Minimal => minimal(inputs),
        EntryStyle::Server => server(inputs),
    }
}

/// Bare Express hello-world listener with extra `require` lines prepended.
///
/// `express` is excluded from the generated requires because the template
/// itself requires it.
fn minimal(inputs: &EntryPointInputs<'_>) -> String {
    let requires = require_lines(inputs.dependencies.iter().filter(|d| *d != "express"));

    let body = "const express = require('express');
const app = express();
const port = process.env.PORT || 3000;

app.get('/', (req, res) => {
    res.send('Hello, world!');
});

app.listen(port, () => {
    console.log(`Server is running on port ${port}`);
});";

    if requires.is_empty() {
        body.to_string()
    } else {
        format!("{requires}\n\n{body}")
    }
}

/// Full server bootstrap: static middleware, EJS view engine, body parsing,
/// Mongo connection, generated routes, listener.
fn server(inputs: &EntryPointInputs<'_>) -> String {
    let mut out = String::new();

    let requires = require_lines(inputs.dependencies.iter());
    if !requires.is_empty() {
        out.push_str(&requires);
        out.push('\n');
    }

    for line in &inputs.model_requires {
        out.push_str(line);
        out.push('\n');
    }
    if !inputs.model_requires.is_empty() {
        out.push('\n');
    }

    let db_name = inputs.db_name.unwrap_or("app");
    out.push_str(&format!(
        "const path = require('path');
const bodyParser = require('body-parser');
const mongoose = require('mongoose');

const app = require('express')();

// Serve static assets from the client directory
app.use(require('express').static(path.join(__dirname, '..', 'client')));

// EJS view engine
app.set('view engine', 'ejs');
app.set('views', path.join(__dirname, 'views'));

// Parse form data
app.use(bodyParser.urlencoded({{ extended: true }}));

mongoose.connect('mongodb://localhost:27017/{db_name}')
    .then(() => {{
        console.log('Mongo connection open');
    }})
    .catch(err => {{
        console.log('Mongo connection error');
        console.log(err);
    }});
"
    ));

    for route in &inputs.routes {
        out.push('\n');
        out.push_str(&route.to_source());
        out.push('\n');
    }

    out.push_str(
        "
const PORT = process.env.PORT || 3000;
app.listen(PORT, () => {
    console.log(`Server is running on port ${PORT}`);
});",
    );

    out
}

/// One `const x = require('x');` line per dependency, insertion order kept.
fn require_lines<'a, I>(deps: I) -> String
where
    I: Iterator<Item = &'a String>,
{
    deps.map(|d| format!("const {d} = require('{d}');"))
        .collect::<Vec<_>>()
        .join("\n")
}
