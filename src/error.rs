//! Error types for shotit operations.
//!
//! This module defines [`ShotitError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration errors are fatal and abort before anything executes
//! - Command errors (`EmptyCommand`, `ProcessFailed`) are reported by the
//!   planner and never escalate
//! - Use `anyhow::Error` (via `ShotitError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for shotit operations.
#[derive(Debug, Error)]
pub enum ShotitError {
    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A declared command is blank after trimming.
    #[error("empty command")]
    EmptyCommand,

    /// Shell command could not be spawned or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    ProcessFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShotitError {
    /// Whether this error belongs to the configuration-loading class.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::Io(_)
        )
    }
}

/// Result type alias for shotit operations.
pub type Result<T> = std::result::Result<T, ShotitError>;
