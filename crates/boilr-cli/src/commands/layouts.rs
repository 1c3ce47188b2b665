//! `boilr layouts` — list the available layout presets.

use boilr_core::domain::layout::LAYOUT_REGISTRY;

use crate::{
    cli::{LayoutsArgs, LayoutsFormat, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: LayoutsArgs, output: OutputManager) -> CliResult<()> {
    // A global --output-format json wins over the command's own flag.
    let format = if output.format() == OutputFormat::Json {
        LayoutsFormat::Json
    } else {
        args.format
    };

    match format {
        LayoutsFormat::Table => print_table(&output)?,
        LayoutsFormat::List => {
            for layout in LAYOUT_REGISTRY {
                output.print(layout.name)?;
            }
        }
        LayoutsFormat::Json => {
            let entries: Vec<_> = LAYOUT_REGISTRY
                .iter()
                .map(|l| {
                    serde_json::json!({
                        "name": l.name,
                        "description": l.description,
                        "directories": l.directories,
                        "entry_point": l.entry_point,
                        "default_dependencies": l.default_dependencies,
                        "uses_database": l.uses_database,
                    })
                })
                .collect();
            output.payload(&serde_json::to_string_pretty(&entries).unwrap_or_default())?;
        }
    }
    Ok(())
}

fn print_table(output: &OutputManager) -> CliResult<()> {
    output.header("Available layouts:")?;
    output.print("")?;
    for layout in LAYOUT_REGISTRY {
        output.print(&format!("  {:<12} {}", layout.name, layout.description))?;
        output.print(&format!(
            "  {:<12} entry: {}, defaults: {}",
            "",
            layout.entry_point,
            layout.default_dependencies.join(", "),
        ))?;
        output.print("")?;
    }
    Ok(())
}
