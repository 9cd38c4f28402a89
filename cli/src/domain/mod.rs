//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod cluster;
pub mod error;
pub mod function;

pub use cluster::{
    ClientIdentity, DEFAULT_NAMESPACE, DEFAULT_WAITING_TIMEOUT, ResourceFamily, ServiceSummary,
    TransportConfig, TriggerSummary,
};
pub use error::{ConfigLoadError, ConnectionError, CreationError, NameError, PromptError};
pub use function::{
    BoundConfig, CreationDescriptor, DEFAULT_RUNTIME, DEFAULT_TEMPLATE, FunctionManifest,
    RUNTIMES, derive_name_and_path, validate_function_name,
};
