//! Shell command execution.
//!
//! Commands are handed to the system shell as written, so pipes,
//! redirection and globs work. The child shares our stdin, stdout and
//! stderr and we block until it exits. There is no timeout.

use crate::error::{Result, ShotitError};
use std::process::{Command, Stdio};

/// Something that can run one shell command to completion.
pub trait CommandRunner {
    /// Spawn `command` and wait for it; `Ok` only on a zero exit.
    fn spawn(&self, command: &str) -> Result<()>;
}

/// Runs commands through the host shell with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn spawn(&self, command: &str) -> Result<()> {
        let (shell, flag) = shell_invocation();
        tracing::debug!(shell, command, "spawning");

        let status = Command::new(shell)
            .arg(flag)
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                tracing::warn!(command, error = %e, "failed to spawn shell");
                ShotitError::ProcessFailed {
                    command: command.to_string(),
                    code: None,
                }
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ShotitError::ProcessFailed {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }
}

/// Execute a declared command.
///
/// Blank commands fail with [`ShotitError::EmptyCommand`] without spawning,
/// in dry-run or not. Under dry-run nothing is spawned and the command
/// counts as a success.
pub fn execute(runner: &dyn CommandRunner, command: &str, dry_run: bool) -> Result<()> {
    if command.trim().is_empty() {
        return Err(ShotitError::EmptyCommand);
    }

    if dry_run {
        tracing::debug!(command, "dry run, not spawning");
        return Ok(());
    }

    runner.spawn(command)
}

/// Shell binary and the flag that makes it run a command string.
fn shell_invocation() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}
