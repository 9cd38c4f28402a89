//! Application services — use-case orchestration over port traits.

pub mod create_config;
pub mod function_create;
