//! Shell completion generation.
//!
//! `clap_complete::Shell` doubles as the `ValueEnum` for the argument and
//! the generator, so one `generate` call covers every supported shell.

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::CliResult;

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "boilr", &mut std::io::stdout());
    Ok(())
}
