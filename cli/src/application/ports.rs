//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use crate::domain::{
    ConfigLoadError, CreationDescriptor, CreationError, NameError, PromptError, TransportConfig,
};

// ── Validation and Terminal Ports ─────────────────────────────────────────────

/// Naming rule applied to every derived function name.
pub trait NameValidator {
    /// Check `name` against the naming rule.
    ///
    /// # Errors
    ///
    /// Returns a [`NameError`] describing the violation.
    fn validate(&self, name: &str) -> Result<(), NameError>;
}

/// Detects whether a user is attached to the terminal.
pub trait TerminalProbe {
    /// `true` when prompts can be shown and answered.
    fn is_interactive(&self) -> bool;
}

/// Enumerates the runtimes offered by the runtime prompt.
pub trait RuntimeCatalog {
    /// Available runtimes, in presentation order.
    fn runtimes(&self) -> Vec<String>;
}

// ── Prompting Port ────────────────────────────────────────────────────────────

/// Blocking terminal prompts. Prompts wait indefinitely.
///
/// Implementations return [`PromptError::Interrupted`] when the user cancels
/// and [`PromptError::Io`] for any other terminal failure.
pub trait Prompter {
    /// Ask for free text, returning `default` when the user submits nothing.
    fn input(&self, message: &str, default: &str) -> Result<String, PromptError>;
    /// Ask for one of `options`, returning the selected index.
    fn select(&self, message: &str, options: &[String], default: usize)
    -> Result<usize, PromptError>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Emit a labelled value (summary line).
    fn field(&self, label: &str, value: &str);
}

// ── Materialization Port ──────────────────────────────────────────────────────

/// Writes a new function project to disk.
pub trait Materializer {
    /// Materialize the project described by `descriptor`.
    ///
    /// # Errors
    ///
    /// Returns a [`CreationError`] if the project cannot be written.
    fn create(&self, descriptor: &CreationDescriptor) -> Result<(), CreationError>;
}

// ── Cluster Connection Port ───────────────────────────────────────────────────

/// Supplies ambient cluster connection configuration.
///
/// Implementations must re-read their source on every call; the client
/// factory relies on this to never hold stale configuration.
pub trait ConnectionConfigProvider {
    /// Load and resolve the current transport configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigLoadError`] if no usable configuration is found.
    fn load(&self) -> Result<TransportConfig, ConfigLoadError>;
}

impl<P: ConnectionConfigProvider + ?Sized> ConnectionConfigProvider for &P {
    fn load(&self) -> Result<TransportConfig, ConfigLoadError> {
        (**self).load()
    }
}
