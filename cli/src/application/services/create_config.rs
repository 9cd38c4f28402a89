//! Application service — resolve the configuration of a new function project.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All terminal interaction is routed through injected port traits.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{
    NameValidator, ProgressReporter, Prompter, RuntimeCatalog, TerminalProbe,
};
use crate::domain::{BoundConfig, CreationDescriptor, PromptError, derive_name_and_path};

/// Outcome of [`ConfigResolver::resolve`].
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The descriptor is validated and ready for materialization.
    Accepted(CreationDescriptor),
    /// The user cancelled the confirmation prompts. Nothing should be created.
    Cancelled,
}

/// States of the confirmation sub-protocol.
#[derive(Debug)]
enum ConfirmState {
    Init(CreationDescriptor),
    Prompting(CreationDescriptor),
    Accepted(CreationDescriptor),
    Cancelled,
    Failed(PromptError),
}

/// Builds a validated [`CreationDescriptor`] from the positional path,
/// bound configuration and (optionally) one interactive round-trip.
pub struct ConfigResolver<'a, V, T, P, C, R> {
    pub validator: &'a V,
    pub terminal: &'a T,
    pub prompter: &'a P,
    pub runtimes: &'a C,
    pub reporter: &'a R,
}

impl<V, T, P, C, R> ConfigResolver<'_, V, T, P, C, R>
where
    V: NameValidator,
    T: TerminalProbe,
    P: Prompter,
    C: RuntimeCatalog,
    R: ProgressReporter,
{
    /// Resolve the creation descriptor.
    ///
    /// The first element of `args`, if any, is the project path; relative
    /// paths are taken against `cwd`. The derived name is validated before
    /// any prompt is shown.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::domain::NameError`] if the derived name is invalid,
    /// or a [`PromptError::Io`] if the terminal fails during confirmation.
    pub fn resolve(&self, args: &[String], bound: &BoundConfig, cwd: &Path) -> Result<Resolution> {
        let raw_path = args.first().map_or("", String::as_str);
        let descriptor = CreationDescriptor::new(raw_path, cwd, bound);
        tracing::debug!(
            raw_path,
            name = %descriptor.name,
            path = %descriptor.path.display(),
            "derived function name and path"
        );

        self.validator.validate(&descriptor.name)?;

        let mut state = ConfirmState::Init(descriptor);
        loop {
            tracing::trace!(?state, "confirmation state");
            state = match state {
                ConfirmState::Init(d) => {
                    if d.confirm && self.terminal.is_interactive() {
                        ConfirmState::Prompting(d)
                    } else {
                        self.print_summary(&d);
                        ConfirmState::Accepted(d)
                    }
                }
                ConfirmState::Prompting(d) => match self.prompt(&d, cwd) {
                    Ok(edited) => ConfirmState::Accepted(edited),
                    Err(PromptError::Interrupted) => ConfirmState::Cancelled,
                    Err(e) => ConfirmState::Failed(e),
                },
                ConfirmState::Accepted(d) => return Ok(Resolution::Accepted(d)),
                ConfirmState::Cancelled => {
                    tracing::debug!("confirmation cancelled by user");
                    return Ok(Resolution::Cancelled);
                }
                ConfirmState::Failed(e) => return Err(e.into()),
            };
        }
    }

    fn print_summary(&self, d: &CreationDescriptor) {
        self.reporter.field("Project path:", &d.path.display().to_string());
        self.reporter.field("Function name:", &d.name);
        self.reporter.field("Runtime:", &d.runtime);
        self.reporter.field("Template:", &d.template);
    }

    /// Ask for path, runtime and template in order.
    fn prompt(&self, d: &CreationDescriptor, cwd: &Path) -> Result<CreationDescriptor, PromptError> {
        let path_answer = self.prompt_path(d, cwd)?;

        let runtimes = self.runtimes.runtimes();
        let runtime = if runtimes.is_empty() {
            d.runtime.clone()
        } else {
            let default = runtimes.iter().position(|r| *r == d.runtime).unwrap_or(0);
            let index = self.prompter.select("Runtime", &runtimes, default)?;
            runtimes
                .get(index)
                .cloned()
                .unwrap_or_else(|| d.runtime.clone())
        };

        let template = self.prompter.input("Template", &d.template)?;

        let (name, path) = derive_name_and_path(&path_answer, cwd);
        Ok(CreationDescriptor {
            name,
            path,
            runtime,
            template,
            repositories: d.repositories.clone(),
            verbose: d.verbose,
            confirm: d.confirm,
        })
    }

    /// Repeat the path prompt until its derived name passes validation.
    fn prompt_path(&self, d: &CreationDescriptor, cwd: &Path) -> Result<String, PromptError> {
        let default = d.path.display().to_string();
        loop {
            let answer = self.prompter.input("Project path", &default)?;
            let (name, _) = derive_name_and_path(&answer, cwd);
            match self.validator.validate(&name) {
                Ok(()) => return Ok(answer),
                Err(e) => self.reporter.warn(&e.to_string()),
            }
        }
    }
}
