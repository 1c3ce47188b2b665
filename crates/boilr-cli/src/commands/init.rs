//! `boilr init` — write an annotated starter configuration.

use crate::{
    cli::{InitArgs, global::GlobalArgs},
    config::{AppConfig, Defaults},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let config_path = AppConfig::config_path();

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(&config_path, starter_config()).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", config_path.display()),
        source: e,
    })?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;
    output.info("Inspect it any time with 'boilr config list'")?;

    Ok(())
}

/// The annotated template written by `boilr init`.
///
/// Every key is spelled out with its default so users edit values instead
/// of guessing names; commented entries show the optional ones.
fn starter_config() -> String {
    format!(
        r#"# boilr configuration
# Values here apply whenever the matching flag is not given.

[defaults]
# Layout preset used when --layout is absent: "basic" or "fullstack".
layout = "{layout}"
# Packages added to every scaffolded project, e.g. ["morgan", "dotenv"].
packages = []

[output]
no_color = false
# One of "auto", "human", "plain", "json".
format = "auto"

[catalog]
# Starter file content comes from the built-in catalog unless a JSON
# catalog file is configured here:
# path = "/home/me/boilr-catalog.json"
"#,
        layout = Defaults::default().layout,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_config_parses_back_to_defaults() {
        let cfg: AppConfig = toml::from_str(&starter_config()).unwrap();
        assert_eq!(cfg.defaults.layout, AppConfig::default().defaults.layout);
        assert!(cfg.defaults.packages.is_empty());
        assert_eq!(cfg.output.format, "auto");
        assert!(cfg.catalog.path.is_none());
    }

    #[test]
    fn starter_config_documents_every_section() {
        let template = starter_config();
        for section in ["[defaults]", "[output]", "[catalog]"] {
            assert!(template.contains(section), "missing {section}");
        }
    }
}
