//! Flags shared by every subcommand, flattened into [`super::Cli`].

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
#[command(next_help_heading = "Global options")]
pub struct GlobalArgs {
    /// Raise the log level: `-v` shows scaffold progress, `-vv` adds
    /// per-file and installer diagnostics, `-vvv` traces everything.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Errors only. Scaffolding still happens, silently.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Strip ANSI codes. Also honored when the `NO_COLOR` environment
    /// variable is set (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read configuration from this file instead of the default location
    /// (`boilr config path` prints the default).
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// How stdout is rendered; see [`OutputFormat`].
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format (auto, human, plain, json)"
    )]
    pub output_format: OutputFormat,
}

/// Rendering mode for everything boilr writes to stdout.
///
/// `json` is for scripting: decorative messages are dropped and commands
/// that produce results (`new --dry-run`, `new`, `layouts`) emit a single
/// JSON document instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Status symbols and color.
    Human,
    /// Bare text, safe for logs and pipes.
    Plain,
    /// Machine-readable JSON on stdout, nothing else.
    Json,
}
