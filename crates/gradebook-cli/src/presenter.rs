use std::io::Write;

use gradebook_core::export::format_slots_console;
use gradebook_core::{Error, PersistenceWarning, Presenter, ScoreSlot};
use owo_colors::OwoColorize;
use tracing::error;

/// Renders the form as plain terminal output.
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            error!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn materialize_slots(&mut self, slots: &[ScoreSlot]) {
        self.emit(&format_slots_console(slots));
    }

    fn clear_slots(&mut self) {}

    fn show_result(&mut self, text: &str) {
        self.emit(&text.green().to_string());
    }

    fn show_error(&mut self, error: &Error) {
        let message = if error.is_validation() {
            format!("Input Error: {}", error)
        } else {
            format!("Unexpected Error: An error occurred: {}", error)
        };
        self.emit(&message.red().to_string());
    }

    fn show_warning(&mut self, warning: &PersistenceWarning) {
        self.emit(&format!("Warning: {}", warning).yellow().to_string());
    }
}
