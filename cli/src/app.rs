//! Application context — unified state passed to every command handler.
//!
//! Adding a new cross-cutting concern requires only one field change here;
//! command signatures stay the same.

use crate::output::{HumanRenderer, OutputContext};

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Print verbose output.
    pub verbose: bool,
}

/// Unified application context passed to every command handler.
///
/// Constructed once in `Cli::run()` and passed as `&AppContext` to all
/// command handlers.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// `--verbose` / `FUNC_VERBOSE`.
    pub verbose: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &AppFlags) -> Self {
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            verbose: flags.verbose,
        }
    }

    /// Human-readable renderer over this context's output.
    #[must_use]
    pub fn renderer(&self) -> HumanRenderer<'_> {
        HumanRenderer::new(&self.output)
    }
}
