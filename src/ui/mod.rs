//! Terminal output for progress and reports.
//!
//! This module provides:
//! - [`UserInterface`] trait, the reporting seam the planner writes to
//! - [`TerminalUI`] which prints to stdout
//! - [`MockUI`] which records everything for assertions
//! - [`Theme`] for semantic colors
//!
//! # Example
//!
//! ```
//! use shotit::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.warning("skipping - nmap already available");
//! assert!(ui.has_warning("already available"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for user-facing output.
///
/// Messages are line oriented; callers pass any indentation they want.
pub trait UserInterface {
    /// Theme used to style composed lines.
    fn theme(&self) -> &Theme;

    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display a success line.
    fn success(&mut self, msg: &str);

    /// Display a warning or skip notice.
    fn warning(&mut self, msg: &str);

    /// Display an error line.
    fn error(&mut self, msg: &str);

    /// Echo a command before it runs.
    fn command(&mut self, command: &str);

    /// Display a blank separator line.
    fn blank(&mut self) {
        self.message("");
    }
}
