//! Application service — function project creation use-case.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{
    Materializer, NameValidator, ProgressReporter, Prompter, RuntimeCatalog, TerminalProbe,
};
use crate::application::services::create_config::{ConfigResolver, Resolution};
use crate::domain::{BoundConfig, CreationDescriptor};

/// Outcome of the `create_function` use-case.
#[derive(Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The project was written to disk.
    Created(CreationDescriptor),
    /// The user cancelled; nothing was written.
    Cancelled,
}

/// Resolve the creation descriptor and hand it to the materializer.
///
/// # Errors
///
/// Returns an error if resolution fails (invalid name, prompt I/O) or the
/// materializer fails. Materializer errors are propagated unchanged.
pub fn create_function<V, T, P, C, R>(
    resolver: &ConfigResolver<'_, V, T, P, C, R>,
    materializer: &impl Materializer,
    args: &[String],
    bound: &BoundConfig,
    cwd: &Path,
) -> Result<CreateOutcome>
where
    V: NameValidator,
    T: TerminalProbe,
    P: Prompter,
    C: RuntimeCatalog,
    R: ProgressReporter,
{
    let descriptor = match resolver.resolve(args, bound, cwd)? {
        Resolution::Accepted(d) => d,
        Resolution::Cancelled => return Ok(CreateOutcome::Cancelled),
    };

    resolver
        .reporter
        .step(&format!("Creating function project in {}", descriptor.path.display()));
    materializer.create(&descriptor)?;
    resolver.reporter.success(&format!(
        "Created {} function '{}' in {}",
        descriptor.runtime,
        descriptor.name,
        descriptor.path.display()
    ));
    Ok(CreateOutcome::Created(descriptor))
}
