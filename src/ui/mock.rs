//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion, both per category and as one ordered
//! transcript.
//!
//! # Example
//!
//! ```
//! use shotit::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.command("echo installing nmap");
//! ui.success("installation completed");
//!
//! assert_eq!(ui.commands(), ["echo installing nmap"]);
//! assert!(ui.has_success("completed"));
//! ```

use super::{Theme, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug)]
pub struct MockUI {
    theme: Theme,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    commands: Vec<String>,
    transcript: Vec<String>,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    /// Create a new MockUI with the plain theme.
    pub fn new() -> Self {
        Self {
            theme: Theme::plain(),
            messages: Vec::new(),
            successes: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
            commands: Vec::new(),
            transcript: Vec::new(),
        }
    }

    /// Get all captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get every command echoed, in order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Every line in output order, trimmed, with commands as `$ cmd`.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whole transcript joined with newlines.
    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    fn record(&mut self, line: &str) {
        self.transcript.push(line.trim().to_string());
    }
}

impl UserInterface for MockUI {
    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.record(msg);
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.record(msg);
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.record(msg);
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.record(msg);
    }

    fn command(&mut self, command: &str) {
        self.commands.push(command.to_string());
        self.record(&format!("$ {}", command));
    }
}
