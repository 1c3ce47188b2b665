//! Output rendering.
//!
//! Every user-facing line goes through [`OutputManager`], which resolves the
//! requested output format once at startup and renders accordingly:
//!
//! - `human`: status symbols (`✓ ⚠ ℹ`) and color, unless `--no-color`
//! - `plain`: bare text, `warning:` prefixes, no ANSI codes
//! - `json`:  decorative messages are dropped; commands emit machine
//!   payloads through [`OutputManager::payload`]
//!
//! `auto` picks `human` on a terminal and `plain` otherwise.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Resolve flags + config into a concrete rendering mode.
    ///
    /// The `--output-format` flag wins; an `output.format` config value is
    /// consulted when the flag is left at `auto`; a remaining `auto` falls
    /// back to TTY detection.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = if args.output_format == OutputFormat::Auto {
            match config.output.format.as_str() {
                "human" => OutputFormat::Human,
                "plain" => OutputFormat::Plain,
                "json" => OutputFormat::Json,
                _ => OutputFormat::Auto,
            }
        } else {
            args.output_format
        };

        let format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    fn suppressed(&self) -> bool {
        self.quiet || self.format == OutputFormat::Json
    }

    fn styled(&self, symbol: &str, msg: &str, style: impl Fn(&str) -> String) -> String {
        match self.format {
            OutputFormat::Human if !self.no_color => {
                format!("{} {}", style(symbol), style(msg))
            }
            OutputFormat::Human => format!("{symbol} {msg}"),
            _ => msg.to_owned(),
        }
    }

    // ── Decorative messages (dropped in quiet and json modes) ─────────────

    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.suppressed() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.suppressed() {
            return Ok(());
        }
        let line = self.styled("\u{2713}", msg, |s| s.green().bold().to_string());
        self.term.write_line(&line)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.suppressed() {
            return Ok(());
        }
        let line = match self.format {
            OutputFormat::Human => self.styled("\u{26a0}", msg, |s| s.yellow().bold().to_string()),
            _ => format!("warning: {msg}"),
        };
        self.term.write_line(&line)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.suppressed() {
            return Ok(());
        }
        let line = self.styled("\u{2139}", msg, |s| s.blue().bold().to_string());
        self.term.write_line(&line)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.suppressed() {
            return Ok(());
        }
        let line = if self.format == OutputFormat::Human && !self.no_color {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.term.write_line(&line)
    }

    // ── Machine payloads ──────────────────────────────────────────────────

    /// Write a machine-readable payload. Never styled, never suppressed:
    /// json mode exists so that this is the only thing on stdout.
    pub fn payload(&self, body: &str) -> io::Result<()> {
        self.term.write_line(body)
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn args(output_format: OutputFormat, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color: true,
            config: None,
            output_format,
        }
    }

    #[test]
    fn explicit_format_wins() {
        let out = OutputManager::new(&args(OutputFormat::Json, false), &AppConfig::default());
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn config_format_fills_in_for_auto() {
        let mut config = AppConfig::default();
        config.output.format = "plain".into();
        let out = OutputManager::new(&args(OutputFormat::Auto, false), &config);
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn unknown_config_format_falls_back_to_detection() {
        let mut config = AppConfig::default();
        config.output.format = "yaml".into();
        let out = OutputManager::new(&args(OutputFormat::Auto, false), &config);
        // Either detection outcome is fine; Auto must not survive resolution.
        assert_ne!(out.format(), OutputFormat::Auto);
    }

    #[test]
    fn quiet_and_json_suppress_decorative_output() {
        let quiet = OutputManager::new(&args(OutputFormat::Plain, true), &AppConfig::default());
        assert!(quiet.suppressed());

        let json = OutputManager::new(&args(OutputFormat::Json, false), &AppConfig::default());
        assert!(json.suppressed());

        let plain = OutputManager::new(&args(OutputFormat::Plain, false), &AppConfig::default());
        assert!(!plain.suppressed());
    }

    #[test]
    fn plain_format_has_no_symbols() {
        let out = OutputManager::new(&args(OutputFormat::Plain, false), &AppConfig::default());
        assert_eq!(out.styled("\u{2713}", "done", |s| s.to_owned()), "done");
    }

    #[test]
    fn human_format_keeps_symbol_without_color() {
        let out = OutputManager::new(&args(OutputFormat::Human, false), &AppConfig::default());
        // no_color is set in args(); the symbol survives, the ANSI codes don't
        assert_eq!(out.styled("\u{2713}", "done", |s| s.to_owned()), "\u{2713} done");
    }
}
