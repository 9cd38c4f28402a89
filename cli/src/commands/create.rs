//! `func create` — scaffold a function project.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use clap::builder::{FalseyValueParser, PossibleValue, StringValueParser, TypedValueParser};

use crate::app::AppContext;
use crate::application::services::create_config::ConfigResolver;
use crate::application::services::function_create::{CreateOutcome, create_function};
use crate::domain::{BoundConfig, DEFAULT_RUNTIME, DEFAULT_TEMPLATE, RUNTIMES};
use crate::infra::builtin::{BuiltinRuntimes, DnsLabelValidator};
use crate::infra::config::repositories_dir;
use crate::infra::materializer::FsMaterializer;
use crate::infra::prompter::DialoguerPrompter;
use crate::infra::terminal::ConsoleTerminal;
use crate::output::TerminalReporter;

pub const LONG_ABOUT: &str = "Create a function project

Creates a new function project in PATH, or in the current directory if no PATH is given.
The name of the project is determined by the directory name the project is created in.";

pub const EXAMPLES: &str = "Examples:
  # Create a Node.js function project in the current directory, choosing the
  # directory name as the project's name.
  func create

  # Create a Quarkus function project in the directory \"sample-service\".
  # The directory is created if it does not exist and the project is called
  # \"sample-service\".
  func create --runtime quarkus sample-service

  # Create a function project that uses a CloudEvent based function signature
  func create --template events myfunc";

/// Offers the builtin runtimes to help and shell completion without
/// rejecting others; templates from extended repositories may target any
/// runtime.
#[derive(Clone, Copy, Debug)]
pub struct RuntimeValueParser;

impl TypedValueParser for RuntimeValueParser {
    type Value = String;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &OsStr,
    ) -> Result<String, clap::Error> {
        StringValueParser::new().parse_ref(cmd, arg, value)
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        Some(Box::new(RUNTIMES.iter().map(|r| PossibleValue::new(*r))))
    }
}

/// Arguments for the `func create` command.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Project directory (defaults to the current directory)
    pub path: Option<String>,

    /// Prompt to confirm all configuration options
    #[arg(short, long, env = "FUNC_CONFIRM", value_parser = FalseyValueParser::new())]
    pub confirm: bool,

    /// Function runtime language/framework
    #[arg(
        short = 'l',
        long,
        env = "FUNC_RUNTIME",
        default_value = DEFAULT_RUNTIME,
        value_parser = RuntimeValueParser
    )]
    pub runtime: String,

    /// Path to extended template repositories [default: ~/.config/func/repositories]
    #[arg(short, long, env = "FUNC_REPOSITORIES")]
    pub repositories: Option<PathBuf>,

    /// Function template. Available templates: 'http' and 'events'
    #[arg(short, long, env = "FUNC_TEMPLATE", default_value = DEFAULT_TEMPLATE)]
    pub template: String,
}

impl CreateArgs {
    /// Positional arguments as passed on the command line (zero or one).
    #[must_use]
    pub fn positional(&self) -> Vec<String> {
        self.path.iter().cloned().collect()
    }

    /// Bound configuration; clap has already applied flag > env > default.
    ///
    /// # Errors
    ///
    /// Returns an error if the default repositories path cannot be determined.
    pub fn bind(&self, verbose: bool) -> Result<BoundConfig> {
        let repositories = match &self.repositories {
            Some(path) => path.clone(),
            None => repositories_dir()?,
        };
        Ok(BoundConfig {
            runtime: self.runtime.clone(),
            template: self.template.clone(),
            repositories,
            confirm: self.confirm,
            verbose,
        })
    }
}

/// Run the create command.
///
/// # Errors
///
/// Returns an error on an invalid function name, a terminal failure while
/// prompting, or a failure writing the project.
pub fn run(app: &AppContext, args: &CreateArgs) -> Result<ExitCode> {
    let bound = args.bind(app.verbose)?;
    let cwd = std::env::current_dir().context("cannot determine current directory")?;

    let reporter = TerminalReporter::new(&app.output);
    let prompter = DialoguerPrompter::new();
    let resolver = ConfigResolver {
        validator: &DnsLabelValidator,
        terminal: &ConsoleTerminal,
        prompter: &prompter,
        runtimes: &BuiltinRuntimes,
        reporter: &reporter,
    };

    match create_function(&resolver, &FsMaterializer, &args.positional(), &bound, &cwd)? {
        CreateOutcome::Created(d) => {
            tracing::debug!(path = %d.path.display(), "function project created");
        }
        CreateOutcome::Cancelled => {
            tracing::debug!("create cancelled; nothing written");
        }
    }
    Ok(ExitCode::SUCCESS)
}
