//! Status messages for the terminal.
//!
//! Everything goes to stderr; stdout carries the generated document or the
//! command listing.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};

pub(crate) struct Output {
    term: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Plain progress note.
    pub(crate) fn status(&self, msg: &str) {
        self.line(msg);
    }

    /// Announce a finished document (green).
    pub(crate) fn written(&self, path: &Path) {
        let msg = format!("Documentation written to {}", path.display());
        self.line(&Style::new().green().apply_to(msg).to_string());
    }

    /// Number of commands about to be listed (cyan bold).
    pub(crate) fn command_count(&self, count: usize) {
        let noun = if count == 1 { "command" } else { "commands" };
        let msg = format!("{count} {noun}");
        self.line(&Style::new().cyan().bold().apply_to(msg).to_string());
    }

    /// Fatal error (red).
    pub(crate) fn error(&self, err: &dyn Display) {
        let msg = format!("Error: {err}");
        self.line(&Style::new().red().apply_to(msg).to_string());
    }

    fn line(&self, text: &str) {
        // A closed stderr leaves nowhere to report the failure.
        let _ = self.term.write_line(text);
    }
}
