//! CLI command implementations.
//!
//! Each mode implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results:
//! - [`list`] - print what a config declares
//! - [`check`] - report which binaries and paths are present
//! - [`run`] - execute installs, tools and wordlists

pub mod check;
pub mod dispatcher;
pub mod list;
pub mod run;

pub use check::{AvailabilityReport, CheckCommand};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use list::ListCommand;
pub use run::RunCommand;
