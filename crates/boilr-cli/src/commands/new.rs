//! Implementation of the `boilr new` command.
//!
//! Responsibility: translate CLI arguments (or interactive answers) into a
//! `ScaffoldRequest`, call the core scaffold service, and display results.
//! No business logic lives here.

use tracing::{debug, info, instrument};

use boilr_adapters::{InMemoryCatalog, JsonCatalog, LocalFilesystem, NpmInstaller};
use boilr_core::{
    application::{ScaffoldOptions, ScaffoldService},
    domain::{Layout, ProjectPlan, ScaffoldRequest},
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompts::{self, Answers},
};

/// Execute the `boilr new` command.
///
/// Dispatch sequence:
/// 1. Resolve the layout (flag, then config default)
/// 2. Collect answers (flags, or interactive prompts when `--name` absent)
/// 3. Build the `ScaffoldRequest`
/// 4. Confirm with user unless `--yes` or `--quiet`
/// 5. Early-exit if `--dry-run`
/// 6. Execute scaffolding via `ScaffoldService`
/// 7. Print next-steps guidance
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve layout
    let layout_name = args
        .layout
        .clone()
        .unwrap_or_else(|| config.defaults.layout.clone());
    let layout = Layout::by_name(&layout_name).map_err(|e| CliError::Core(e.into()))?;

    // 2. Collect answers
    let answers = gather_answers(&args, &config, layout)?;

    debug!(
        layout = %layout,
        project = %answers.project_name,
        packages = answers.packages.len(),
        "Answers collected"
    );

    // 3. Build the request
    let mut builder = ScaffoldRequest::builder(layout)
        .project_name(&answers.project_name)
        .root_dir(&args.target_dir)
        .dependencies(&answers.packages);
    for (index, names) in answers.files.iter().enumerate() {
        builder = builder.files_for_slot(index, names);
    }
    if let Some(db) = &answers.db_name {
        builder = builder.db_name(db);
    }
    let request = builder.build().map_err(|e| CliError::Core(e.into()))?;

    let project_path = request.project_path();

    // 4. Show configuration and confirm
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&request, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    if project_path.exists() {
        output.info(&format!(
            "'{}' already exists; files will be regenerated in place",
            project_path.display(),
        ))?;
    }

    // 5. Build the service
    let service = build_service(&config)?;

    // 6. Dry run: describe but do not write.
    if args.dry_run {
        let plan = service.plan(&request).map_err(CliError::Core)?;
        print_plan(&plan, &output)?;
        return Ok(());
    }

    output.header(&format!("Creating '{}'...", request.project_name()))?;
    info!(project = %request.project_name(), path = %project_path.display(), "Scaffold started");

    let report = service
        .scaffold(
            &request,
            ScaffoldOptions {
                install: !args.no_install,
            },
        )
        .map_err(CliError::Core)?;

    info!(project = %request.project_name(), "Scaffold completed");

    // 7. Success + next steps
    if output.format() == OutputFormat::Json {
        let body = serde_json::json!({
            "project": request.project_name(),
            "path": project_path.display().to_string(),
            "directories_created": report.directories_created,
            "files_written": report.files_written,
            "installed": report.installed,
            "install_warning": report.install_warning,
        });
        output.payload(&serde_json::to_string_pretty(&body).unwrap_or_default())?;
        return Ok(());
    }

    output.success(&format!(
        "Project '{}' created ({} files, {} directories)",
        request.project_name(),
        report.files_written,
        report.directories_created,
    ))?;

    if let Some(warning) = &report.install_warning {
        output.warning(&format!("Dependency installation failed: {warning}"))?;
        output.warning("Run 'npm install' inside the project to finish setup")?;
    }

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", request.project_name()))?;
        if args.no_install {
            output.print("  npm install")?;
        }
        output.print("  npm run dev")?;
    }

    Ok(())
}

// ── Answer gathering ──────────────────────────────────────────────────────────

/// Build the answers record from flags, or fall back to interactive prompts
/// when `--name` was not given.
fn gather_answers(args: &NewArgs, config: &AppConfig, layout: &Layout) -> CliResult<Answers> {
    let Some(name) = &args.name else {
        return prompts::collect(layout);
    };

    let mut packages = config.defaults.packages.clone();
    if let Some(list) = &args.packages {
        packages.extend(prompts::split_csv(list));
    }

    Ok(Answers {
        project_name: name.clone(),
        packages,
        files: parse_file_args(&args.files, layout)?,
        db_name: args.db.clone(),
    })
}

/// Parse repeated `--files KEY=LIST` flags into per-slot name lists.
///
/// `KEY` is the slot directory relative to the project root; `.` (or an
/// empty key) addresses the root slot.
fn parse_file_args(entries: &[String], layout: &Layout) -> CliResult<Vec<Vec<String>>> {
    let mut files = vec![Vec::new(); layout.slots.len()];

    for entry in entries {
        let (key, list) = entry.split_once('=').ok_or_else(|| CliError::InvalidInput {
            message: format!("--files expects KEY=LIST, got '{entry}'"),
            source: None,
        })?;

        let key = if key == "." { "" } else { key };
        let index = layout
            .slots
            .iter()
            .position(|s| s.dir == key)
            .ok_or_else(|| CliError::InvalidInput {
                message: format!(
                    "'{key}' is not a directory of the '{layout}' layout (expected one of: {})",
                    layout
                        .slots
                        .iter()
                        .map(|s| if s.dir.is_empty() { "." } else { s.dir })
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
                source: None,
            })?;

        files[index].extend(prompts::split_csv(list));
    }

    Ok(files)
}

// ── Service wiring ────────────────────────────────────────────────────────────

/// Wire up the production adapters.  The catalog comes from the config's
/// JSON file when one is set, otherwise the built-in starters.
fn build_service(config: &AppConfig) -> CliResult<ScaffoldService> {
    let catalog: Box<dyn boilr_core::application::TemplateCatalog> =
        match &config.catalog.path {
            Some(path) => Box::new(JsonCatalog::load(path).map_err(CliError::Core)?),
            None => Box::new(InMemoryCatalog::with_builtin()),
        };

    Ok(ScaffoldService::new(
        catalog,
        Box::new(LocalFilesystem::new()),
        Box::new(NpmInstaller::new()),
    ))
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(request: &ScaffoldRequest, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:   {}", request.project_name()))?;
    out.print(&format!("  Layout:    {}", request.layout()))?;
    out.print(&format!("  Location:  {}", request.project_path().display()))?;
    if !request.dependencies().is_empty() {
        out.print(&format!("  Packages:  {}", request.dependencies().join(", ")))?;
    }
    if let Some(db) = request.db_name() {
        out.print(&format!("  Database:  {db}"))?;
    }
    out.print("")?;
    Ok(())
}

fn print_plan(plan: &ProjectPlan, out: &OutputManager) -> CliResult<()> {
    if out.format() == OutputFormat::Json {
        let body = serde_json::json!({
            "root": plan.root().display().to_string(),
            "directories": plan
                .directories()
                .map(|d| d.path.display().to_string())
                .collect::<Vec<_>>(),
            "files": plan
                .files()
                .map(|f| {
                    serde_json::json!({
                        "path": f.path.display().to_string(),
                        "bytes": f.content.len(),
                    })
                })
                .collect::<Vec<_>>(),
        });
        out.payload(&serde_json::to_string_pretty(&body).unwrap_or_default())?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create '{}' with {} entries",
        plan.root().display(),
        plan.entry_count(),
    ))?;
    for dir in plan.directories() {
        out.print(&format!("  dir   {}/", dir.path.display()))?;
    }
    for file in plan.files() {
        out.print(&format!(
            "  file  {}  ({} bytes)",
            file.path.display(),
            file.content.len(),
        ))?;
    }
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn fullstack() -> &'static Layout {
        Layout::by_name("fullstack").unwrap()
    }

    // ── parse_file_args ───────────────────────────────────────────────────

    #[test]
    fn files_flag_maps_to_slot_index() {
        let entries = vec!["server/views=home,about".to_string()];
        let files = parse_file_args(&entries, fullstack()).unwrap();

        let views_index = fullstack()
            .slots
            .iter()
            .position(|s| s.dir == "server/views")
            .unwrap();
        assert_eq!(files[views_index], vec!["home", "about"]);
    }

    #[test]
    fn repeated_files_flags_accumulate() {
        let entries = vec![
            "models=user.js".to_string(),
            "models=order.js".to_string(),
        ];
        let files = parse_file_args(&entries, fullstack()).unwrap();

        let models_index = fullstack()
            .slots
            .iter()
            .position(|s| s.dir == "models")
            .unwrap();
        assert_eq!(files[models_index], vec!["user.js", "order.js"]);
    }

    #[test]
    fn dot_key_addresses_root_slot() {
        let basic = Layout::by_name("basic").unwrap();
        let entries = vec![".=app.js".to_string()];
        let files = parse_file_args(&entries, basic).unwrap();
        assert_eq!(files[0], vec!["app.js"]);
    }

    #[test]
    fn missing_equals_is_invalid_input() {
        let entries = vec!["server/views".to_string()];
        assert!(matches!(
            parse_file_args(&entries, fullstack()),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn unknown_key_lists_valid_keys() {
        let entries = vec!["nope=x".to_string()];
        let err = parse_file_args(&entries, fullstack()).unwrap_err();
        match err {
            CliError::InvalidInput { message, .. } => {
                assert!(message.contains("server/views"));
                assert!(message.contains("models"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
