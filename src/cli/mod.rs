//! Command-line interface for shotit.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Mode};
pub use commands::{Command, CommandDispatcher, CommandResult};
