//! Terminal detection — implements the `TerminalProbe` port.

use std::io::IsTerminal;

use console::Term;

use crate::application::ports::TerminalProbe;

/// Interactive when both stdin and stdout are attached to a terminal.
pub struct ConsoleTerminal;

impl TerminalProbe for ConsoleTerminal {
    fn is_interactive(&self) -> bool {
        Term::stdout().is_term() && std::io::stdin().is_terminal()
    }
}
