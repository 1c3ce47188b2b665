//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "boilr",
    bin_name = "boilr",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Express app boilerplate generator",
    long_about = "Boilr scaffolds Express web-app boilerplate: directory \
                  tree, starter files, EJS views with matching assets, \
                  Mongoose model stubs, entry point, and package.json.",
    after_help = "EXAMPLES:\n\
        \x20 boilr new --name my-app --layout fullstack\n\
        \x20 boilr new ../sandbox --name demo --files server/views=home,about --yes\n\
        \x20 boilr layouts\n\
        \x20 boilr completions bash > /usr/share/bash-completion/completions/boilr",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new project.
    #[command(
        visible_alias = "n",
        about = "Scaffold a new project",
        after_help = "EXAMPLES:\n\
            \x20 boilr new --name my-app\n\
            \x20 boilr new --name my-app --layout basic --packages morgan,dotenv\n\
            \x20 boilr new ../work --name shop --db shop_db --files models=user.js,order.js --yes"
    )]
    New(NewArgs),

    /// List available layout presets.
    #[command(
        visible_alias = "ls",
        about = "List available layouts",
        after_help = "EXAMPLES:\n\
            \x20 boilr layouts\n\
            \x20 boilr layouts --format json"
    )]
    Layouts(LayoutsArgs),

    /// Initialise a Boilr configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 boilr init           # default location\n\
            \x20 boilr init --force   # overwrite existing config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 boilr completions bash > ~/.local/share/bash-completion/completions/boilr\n\
            \x20 boilr completions zsh  > ~/.zfunc/_boilr\n\
            \x20 boilr completions fish > ~/.config/fish/completions/boilr.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Boilr configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 boilr config get defaults.layout\n\
            \x20 boilr config list\n\
            \x20 boilr config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `boilr new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Directory the project folder is created in.
    #[arg(
        value_name = "TARGET_DIR",
        default_value = ".",
        help = "Directory to create the project in"
    )]
    pub target_dir: PathBuf,

    /// Layout preset.
    #[arg(
        short = 'l',
        long = "layout",
        value_name = "LAYOUT",
        help = "Layout preset (basic, fullstack)"
    )]
    pub layout: Option<String>,

    /// Project name.  When omitted, answers are collected interactively.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Extra npm packages, comma-separated, in install order.
    #[arg(
        short = 'p',
        long = "packages",
        value_name = "LIST",
        help = "Extra packages, comma-separated (e.g. morgan,dotenv)"
    )]
    pub packages: Option<String>,

    /// Database name for the connection string.
    #[arg(long = "db", value_name = "NAME", help = "Database name")]
    pub db: Option<String>,

    /// Files to create per directory slot, `<dir-key>=<comma-list>`.
    ///
    /// The dir-key is the slot's directory relative to the project root
    /// (empty string or `.` for the root itself).  Repeatable.
    #[arg(
        long = "files",
        value_name = "KEY=LIST",
        help = "Files per directory, e.g. --files server/views=home,about"
    )]
    pub files: Vec<String>,

    /// Skip dependency installation.
    #[arg(long = "no-install", help = "Skip npm install")]
    pub no_install: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,
}

// ── layouts ───────────────────────────────────────────────────────────────────

/// Arguments for `boilr layouts`.
#[derive(Debug, Args)]
pub struct LayoutsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: LayoutsFormat,
}

/// Output format for the `layouts` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LayoutsFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `boilr init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `boilr completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `boilr config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.layout`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "boilr", "new", "--name", "my-app", "--layout", "fullstack", "--yes",
        ]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.name.as_deref(), Some("my-app"));
            assert_eq!(args.layout.as_deref(), Some("fullstack"));
            assert_eq!(args.target_dir, PathBuf::from("."));
            assert!(args.yes);
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn new_accepts_target_dir_and_repeated_files() {
        let cli = Cli::parse_from([
            "boilr",
            "new",
            "../work",
            "--name",
            "demo",
            "--files",
            "server/views=home,about",
            "--files",
            "models=user.js",
        ]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.target_dir, PathBuf::from("../work"));
            assert_eq!(args.files.len(), 2);
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn completions_parses_shell_names() {
        let cli = Cli::parse_from(["boilr", "completions", "zsh"]);
        if let Commands::Completions(args) = cli.command {
            assert_eq!(args.shell, clap_complete::Shell::Zsh);
        } else {
            panic!("expected Completions command");
        }
    }

    #[test]
    fn layouts_alias() {
        let cli = Cli::parse_from(["boilr", "ls"]);
        assert!(matches!(cli.command, Commands::Layouts(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["boilr", "--quiet", "--verbose", "layouts"]);
        assert!(result.is_err());
    }
}
