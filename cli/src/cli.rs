//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Create and inspect serverless functions
#[derive(Parser)]
#[command(
    name = "func",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Print verbose logs
    #[arg(short, long, global = true, env = "FUNC_VERBOSE", value_parser = FalseyValueParser::new())]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a function project
    #[command(
        alias = "new",
        long_about = commands::create::LONG_ABOUT,
        after_help = commands::create::EXAMPLES
    )]
    Create(commands::create::CreateArgs),

    /// List functions deployed to the cluster
    List(commands::list::ListArgs),

    /// Generate shell completions
    Completion(commands::completion::CompletionArgs),
}

impl Cli {
    /// Parse the process arguments, exiting on error.
    ///
    /// Env-bound globals (`NO_COLOR`, `FUNC_VERBOSE`) count as supplied
    /// arguments to clap, which suppresses `arg_required_else_help`. A
    /// missing subcommand therefore prints the full help on stderr and
    /// exits 2, the same as a bare `func`.
    #[must_use]
    pub fn parse_or_help() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e) if e.kind() == ErrorKind::MissingSubcommand => {
                eprintln!("{}", Self::command().render_help());
                std::process::exit(2);
            }
            Err(e) => e.exit(),
        }
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            verbose,
            quiet,
            no_color,
            command,
        } = self;
        let app = AppContext::new(&AppFlags {
            no_color,
            quiet,
            verbose,
        });
        match command {
            Command::Create(args) => commands::create::run(&app, &args),
            Command::List(args) => commands::list::run(&app, &args).await,
            Command::Completion(args) => commands::completion::run(&args),
        }
    }
}
