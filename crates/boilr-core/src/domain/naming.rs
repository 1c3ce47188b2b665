//! Filename normalization helpers.
//!
//! These are the only "algorithms" in the scaffolder: pure, deterministic
//! string transformations with no I/O and no failure modes.

/// Normalize a filename so that it ends in `target` (e.g. `.js`).
///
/// ## Rules
///
/// 1. Already has the target extension → returned unchanged.
/// 2. Ends with the *sibling* extension (`.css` when targeting `.js`, or
///    `.js` when targeting `.css`) → suffix replaced. Users frequently type
///    `main.css` into the scripts prompt and vice versa; swapping rather
///    than appending avoids `main.css.js`.
/// 3. Otherwise → target extension appended.
///
/// | Input | Target | Output |
/// |-------|--------|--------|
/// | `app.js` | `.js` | `app.js` |
/// | `app.css` | `.js` | `app.js` |
/// | `app` | `.css` | `app.css` |
/// | `app.min` | `.js` | `app.min.js` |
pub fn normalize_extension(name: &str, target: &str) -> String {
    if name.ends_with(target) {
        return name.to_string();
    }

    if let Some(sibling) = sibling_extension(target) {
        if let Some(stem) = name.strip_suffix(sibling) {
            return format!("{stem}{target}");
        }
    }

    format!("{name}{target}")
}

/// The mismatched partner in the `.js`/`.css` pair, if any.
fn sibling_extension(target: &str) -> Option<&'static str> {
    match target {
        ".js" => Some(".css"),
        ".css" => Some(".js"),
        _ => None,
    }
}

/// Strip a single trailing extension if present (`index.ejs` → `index`).
///
/// Only the given extension is stripped; `index.html` stays `index.html`
/// when asked to strip `.ejs`. Mirrors `path.basename(file, ext)` semantics.
pub fn strip_extension<'a>(name: &'a str, extension: &str) -> &'a str {
    name.strip_suffix(extension).unwrap_or(name)
}

/// Uppercase the first character, leaving the rest untouched.
///
/// Used for model names: `user.js` becomes the `User` schema. Unicode-aware
/// (`é` → `É` expands correctly through `to_uppercase`).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
