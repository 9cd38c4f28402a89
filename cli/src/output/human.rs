//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::domain::{ServiceSummary, TriggerSummary};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the functions deployed in `namespace`.
    pub fn render_functions(&self, namespace: &str, functions: &[ServiceSummary]) {
        if functions.is_empty() {
            self.ctx
                .info(&format!("No functions found in namespace '{namespace}'."));
            return;
        }
        self.ctx.header(&format!("Functions in namespace '{namespace}':"));
        let width = functions.iter().map(|f| f.name.len()).max().unwrap_or(0);
        for f in functions {
            let url = f.url.as_deref().unwrap_or("-");
            self.row(&f.name, width, url, f.ready);
        }
    }

    /// Render the triggers in `namespace`.
    pub fn render_triggers(&self, namespace: &str, triggers: &[TriggerSummary]) {
        println!();
        if triggers.is_empty() {
            self.ctx
                .info(&format!("No triggers found in namespace '{namespace}'."));
            return;
        }
        self.ctx.header(&format!("Triggers in namespace '{namespace}':"));
        let width = triggers.iter().map(|t| t.name.len()).max().unwrap_or(0);
        for t in triggers {
            let target = format!(
                "{} → {}",
                t.broker,
                t.subscriber.as_deref().unwrap_or("-")
            );
            self.row(&t.name, width, &target, t.ready);
        }
    }

    fn row(&self, name: &str, width: usize, detail: &str, ready: bool) {
        if self.ctx.quiet {
            return;
        }
        let mark = if ready {
            format!("{}", "✓".style(self.ctx.styles.success))
        } else {
            format!("{}", "…".style(self.ctx.styles.warning))
        };
        println!("  {mark} {name:<width$}  {}", detail.style(self.ctx.styles.dim));
    }
}
