//! Terminal UI writing to stdout.

use console::Term;
use std::io::Write;

use super::{Theme, UserInterface};

/// Line-oriented terminal output.
pub struct TerminalUI {
    term: Term,
    theme: Theme,
}

impl TerminalUI {
    /// Create a terminal UI, choosing colors from the environment.
    pub fn new() -> Self {
        Self::with_theme(Theme::detect())
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
        }
    }

    fn write_line(&mut self, line: &str) {
        writeln!(self.term, "{}", line).ok();
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn message(&mut self, msg: &str) {
        self.write_line(msg);
    }

    fn success(&mut self, msg: &str) {
        let line = self.theme.success.apply_to(msg).to_string();
        self.write_line(&line);
    }

    fn warning(&mut self, msg: &str) {
        let line = self.theme.warning.apply_to(msg).to_string();
        self.write_line(&line);
    }

    fn error(&mut self, msg: &str) {
        let line = self.theme.error.apply_to(msg).to_string();
        self.write_line(&line);
    }

    fn command(&mut self, command: &str) {
        let line = format!("  {}", self.theme.format_command(command));
        self.write_line(&line);
    }
}
