//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: terminal prompts, filesystem
//! writes, kubeconfig loading, and the HTTP clients for remote resources.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod builtin;
pub mod config;
pub mod knative;
pub mod kubeconfig;
pub mod materializer;
pub mod prompter;
pub mod terminal;
