//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the active [`Mode`]

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Mode};
use crate::error::Result;
use crate::runner::RunOptions;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each mode implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches an invocation to the command for its mode.
pub struct CommandDispatcher {
    config_path: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given config file.
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Get the config file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Dispatch and execute the command for the CLI's mode.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match cli.mode() {
            Mode::List => super::list::ListCommand::new(&self.config_path).execute(ui),
            Mode::BinaryCheck => super::check::CheckCommand::new(&self.config_path).execute(ui),
            Mode::Execute => {
                let options = RunOptions {
                    dry_run: cli.dry_run,
                    skip_available: cli.skip_available,
                    skip_names: cli.skip_names(),
                };
                super::run::RunCommand::new(&self.config_path, options).execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShotitError;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_constructors() {
        let ok = CommandResult::success();
        assert!(ok.success);
        assert_eq!(ok.exit_code, 0);

        let failed = CommandResult::failure(3);
        assert!(!failed.success);
        assert_eq!(failed.exit_code, 3);
    }

    #[test]
    fn dispatch_list_mode() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tools.yaml");
        fs::write(&path, "name: recon\ntools:\n  - name: nmap\n").unwrap();

        let cli = Cli::try_parse_from(["shotit", "-c", path.to_str().unwrap(), "--list"]).unwrap();
        let dispatcher = CommandDispatcher::new(cli.config.clone());
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Config: recon"));
    }

    #[test]
    fn dispatch_surfaces_missing_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yaml");

        let cli = Cli::try_parse_from(["shotit", "-c", path.to_str().unwrap()]).unwrap();
        let dispatcher = CommandDispatcher::new(cli.config.clone());
        let mut ui = MockUI::new();

        let err = dispatcher.dispatch(&cli, &mut ui).unwrap_err();
        assert!(matches!(err, ShotitError::ConfigNotFound { .. }));
    }
}
