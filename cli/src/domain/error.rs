//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::cluster::ResourceFamily;

// ── Naming errors ─────────────────────────────────────────────────────────────

/// A derived function name violates the naming rule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Function name is empty. Run 'func create <PATH>' with a named directory.")]
    Empty,

    #[error("Function name '{name}' is too long: {len} characters, at most 63 allowed.")]
    TooLong { name: String, len: usize },

    #[error(
        "Function name '{name}' is invalid: must consist of lower case alphanumeric \
         characters or '-', start with a letter, and end with an alphanumeric character"
    )]
    Invalid { name: String },
}

// ── Prompt errors ─────────────────────────────────────────────────────────────

/// Failure while reading an answer from the terminal.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user interrupted the prompt (Ctrl-C / Esc). Not a failure.
    #[error("prompt interrupted")]
    Interrupted,

    #[error("cannot read from terminal")]
    Io(#[from] std::io::Error),
}

// ── Creation errors ───────────────────────────────────────────────────────────

/// Errors raised while materializing a function project on disk.
#[derive(Debug, Error)]
pub enum CreationError {
    #[error("Function already initialized at {}", path.display())]
    AlreadyInitialized { path: PathBuf },

    #[error("Directory {} is not empty. Choose an empty or new directory.", path.display())]
    NotEmpty { path: PathBuf },

    #[error("Unsupported runtime '{runtime}'. Available runtimes: {available}")]
    UnsupportedRuntime { runtime: String, available: String },

    #[error("Template '{template}' not found for runtime '{runtime}' (looked in {})", searched.display())]
    TemplateNotFound {
        template: String,
        runtime: String,
        searched: PathBuf,
    },

    #[error("cannot access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize function manifest: {0}")]
    Manifest(String),
}

// ── Connection errors ─────────────────────────────────────────────────────────

/// Errors raised while loading ambient cluster connection configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("no kubeconfig found at {} and not running inside a cluster", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot determine home directory")]
    NoHomeDir,

    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse kubeconfig {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("kubeconfig has no current context")]
    NoCurrentContext,

    #[error("context '{0}' not found in kubeconfig")]
    MissingContext(String),

    #[error("cluster '{0}' not found in kubeconfig")]
    MissingCluster(String),

    #[error("user '{0}' not found in kubeconfig")]
    MissingUser(String),

    #[error("invalid {field}: {reason}")]
    InvalidData { field: &'static str, reason: String },
}

/// Errors raised by the platform client factory. Always fatal to the call.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("failed to create new {family} client")]
    LoadConfig {
        family: ResourceFamily,
        #[source]
        source: ConfigLoadError,
    },

    #[error("failed to create new {family} client")]
    Instantiate {
        family: ResourceFamily,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ConnectionError {
    /// The resource family whose client could not be created.
    #[must_use]
    pub fn family(&self) -> ResourceFamily {
        match self {
            Self::LoadConfig { family, .. } | Self::Instantiate { family, .. } => *family,
        }
    }
}
