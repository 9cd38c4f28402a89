//! `func completion` — shell completion scripts.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Arguments for the `func completion` command.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `args.shell` to stdout.
///
/// # Errors
///
/// This function currently always succeeds.
pub fn run(args: &CompletionArgs) -> Result<ExitCode> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "func", &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}
