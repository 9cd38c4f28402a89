//! Function project domain types and pure derivation/validation functions.
//!
//! This module is intentionally free of I/O, async, and external layer imports.
//! The working directory is passed in rather than read from the process.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::NameError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Runtime used when neither `--runtime` nor `FUNC_RUNTIME` is given.
pub const DEFAULT_RUNTIME: &str = "node";

/// Template used when neither `--template` nor `FUNC_TEMPLATE` is given.
pub const DEFAULT_TEMPLATE: &str = "http";

/// Runtimes a project can be created for, in presentation order.
pub const RUNTIMES: &[&str] = &[
    "go",
    "node",
    "python",
    "quarkus",
    "rust",
    "springboot",
    "typescript",
];

/// Templates that need no extended repository.
pub const BUILTIN_TEMPLATES: &[&str] = &["http", "events"];

/// File written at the root of every created project.
pub const MANIFEST_FILENAME: &str = "func.yaml";

/// Maximum length of a function name (DNS-1035 label).
pub const MAX_NAME_LEN: usize = 63;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z]([-a-z0-9]*[a-z0-9])?$").expect("valid regex")
});

// ── Bound configuration ──────────────────────────────────────────────────────

/// Configuration values after flag > environment > default precedence has
/// been applied by the argument binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundConfig {
    pub runtime: String,
    pub template: String,
    pub repositories: PathBuf,
    pub confirm: bool,
    pub verbose: bool,
}

// ── Creation descriptor ──────────────────────────────────────────────────────

/// Fully resolved parameters describing a new function project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationDescriptor {
    /// Function name, taken from the last segment of `path`.
    pub name: String,
    /// Absolute project root.
    pub path: PathBuf,
    /// Runtime language/framework.
    pub runtime: String,
    /// Template name, either builtin (`http`, `events`) or `repo/name`.
    pub template: String,
    /// Root of extended template repositories.
    pub repositories: PathBuf,
    pub verbose: bool,
    pub confirm: bool,
}

impl CreationDescriptor {
    /// Build a descriptor for `raw_path` using the bound configuration for
    /// every field that is not derived from the path.
    #[must_use]
    pub fn new(raw_path: &str, cwd: &Path, bound: &BoundConfig) -> Self {
        let (name, path) = derive_name_and_path(raw_path, cwd);
        Self {
            name,
            path,
            runtime: bound.runtime.clone(),
            template: bound.template.clone(),
            repositories: bound.repositories.clone(),
            verbose: bound.verbose,
            confirm: bound.confirm,
        }
    }
}

/// Contents of `func.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionManifest {
    pub name: String,
    pub runtime: String,
    pub template: String,
    pub created: DateTime<Utc>,
}

impl FunctionManifest {
    #[must_use]
    pub fn new(descriptor: &CreationDescriptor, created: DateTime<Utc>) -> Self {
        Self {
            name: descriptor.name.clone(),
            runtime: descriptor.runtime.clone(),
            template: descriptor.template.clone(),
            created,
        }
    }
}

// ── Derivation ───────────────────────────────────────────────────────────────

/// Derive the function name and absolute project path from a user-supplied
/// path.
///
/// An empty `raw_path` means `cwd`. Relative paths are joined onto `cwd`.
/// The result is lexically normalised (`.` dropped, `..` pops a segment)
/// without touching the filesystem, so the call is pure and idempotent. The
/// name is the final path segment, or empty when there is none (e.g. `/`).
#[must_use]
pub fn derive_name_and_path(raw_path: &str, cwd: &Path) -> (String, PathBuf) {
    let joined = if raw_path.is_empty() {
        cwd.to_path_buf()
    } else {
        cwd.join(raw_path)
    };
    let path = normalize(&joined);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    (name, path)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

// ── Validation ───────────────────────────────────────────────────────────────

/// Validate a function name against the DNS-1035 label rule:
/// `^[a-z]([-a-z0-9]*[a-z0-9])?$`, at most 63 characters.
///
/// # Errors
///
/// Returns a [`NameError`] describing the violation.
pub fn validate_function_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(NameError::TooLong {
            name: name.to_string(),
            len,
        });
    }
    if !NAME_RE.is_match(name) {
        return Err(NameError::Invalid {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Returns `true` if `runtime` is one of [`RUNTIMES`].
#[must_use]
pub fn is_known_runtime(runtime: &str) -> bool {
    RUNTIMES.contains(&runtime)
}

// ── Unit tests ───────────────────────────────────────────────────────────────
