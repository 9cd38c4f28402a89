//! JSON output helpers.
//!
//! Provides the listing document printed by `func list --json` and the
//! error-object formatter used when a `--json` command fails.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::{ServiceSummary, TriggerSummary};

/// Document printed by `func list --json`.
#[derive(Debug, Serialize)]
pub struct Listing<'a> {
    pub namespace: &'a str,
    pub functions: &'a [ServiceSummary],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggers: Option<&'a [TriggerSummary]>,
}

/// Pretty-print a listing.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_listing(listing: &Listing<'_>) -> Result<String> {
    serde_json::to_string_pretty(listing).context("JSON serialization failed")
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
