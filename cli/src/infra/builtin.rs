//! Built-in implementations of the `NameValidator` and `RuntimeCatalog` ports.

use crate::application::ports::{NameValidator, RuntimeCatalog};
use crate::domain::{NameError, RUNTIMES, validate_function_name};

/// Enforces the DNS-1035 label rule on function names.
pub struct DnsLabelValidator;

impl NameValidator for DnsLabelValidator {
    fn validate(&self, name: &str) -> Result<(), NameError> {
        validate_function_name(name)
    }
}

/// The runtimes compiled into this binary.
pub struct BuiltinRuntimes;

impl RuntimeCatalog for BuiltinRuntimes {
    fn runtimes(&self) -> Vec<String> {
        RUNTIMES.iter().map(ToString::to_string).collect()
    }
}
