//! Interactive answer collection.
//!
//! Compiled only with the default-on `interactive` feature; without it the
//! CLI still works fully via flags (`--name`, `--packages`, `--files`).

use boilr_core::domain::Layout;

use crate::error::CliResult;

/// Everything `boilr new` needs beyond the layout and target directory.
///
/// Collected either from flags or from the interactive prompts; the
/// scaffolder consumes this record without caring which.
#[derive(Debug, Clone, Default)]
pub struct Answers {
    pub project_name: String,
    pub packages: Vec<String>,
    /// Requested files per layout slot, parallel to `layout.slots`.
    pub files: Vec<Vec<String>>,
    pub db_name: Option<String>,
}

/// Split a comma-separated answer into raw entries.
///
/// No trimming or empty-dropping here; the request builder owns that
/// cleanup so flag input and prompt input go through the same path.
pub fn split_csv(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    input.split(',').map(str::to_string).collect()
}

/// Collect answers interactively for the given layout.
#[cfg(feature = "interactive")]
pub fn collect(layout: &Layout) -> CliResult<Answers> {
    use dialoguer::Input;

    let project_name: String = Input::new()
        .with_prompt("Project name")
        .interact_text()
        .map_err(prompt_error)?;

    let packages: String = Input::new()
        .with_prompt("Extra packages (comma-separated, empty for none)")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let mut files = Vec::with_capacity(layout.slots.len());
    for slot in layout.slots {
        let answer: String = Input::new()
            .with_prompt(format!(
                "Files for the {} (comma-separated, empty for none)",
                slot.label
            ))
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        files.push(split_csv(&answer));
    }

    let db_name = if layout.uses_database {
        let answer: String = Input::new()
            .with_prompt("Database name (empty for default)")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        (!answer.trim().is_empty()).then_some(answer)
    } else {
        None
    };

    Ok(Answers {
        project_name,
        packages: split_csv(&packages),
        files,
        db_name,
    })
}

/// Without the `interactive` feature, answers must come from flags.
#[cfg(not(feature = "interactive"))]
pub fn collect(_layout: &Layout) -> CliResult<Answers> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(feature = "interactive")]
fn prompt_error(e: dialoguer::Error) -> crate::error::CliError {
    let dialoguer::Error::IO(io_err) = e;
    crate::error::CliError::IoError {
        message: "prompt failed".into(),
        source: io_err,
    }
}
