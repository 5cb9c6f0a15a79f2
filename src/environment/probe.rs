//! Host probes: binaries on PATH, filesystem paths and the OS.
//!
//! The planner never touches the host directly; it asks a [`Probe`].
//! [`HostProbe`] answers from the real system, tests substitute their own.
//!
//! # Example
//!
//! ```
//! use shotit::environment::{HostProbe, Probe};
//!
//! let probe = HostProbe::new();
//! assert!(!probe.binary_exists("this-binary-does-not-exist-12345"));
//! ```

use std::env::VarError;
use std::path::Path;

use super::os::{os_matches, OsKind};
use crate::steps::entity::AvailabilitySignal;

/// Read-only questions about the host system.
pub trait Probe {
    /// Whether `name` resolves to an executable on the search path.
    fn binary_exists(&self, name: &str) -> bool;

    /// Whether `path` exists after environment variable expansion.
    fn path_exists(&self, path: &str) -> bool;

    /// Whether the host looks like the given OS.
    fn os_matches(&self, kind: OsKind) -> bool;

    /// Resolve an availability signal through the matching probe.
    fn signal_present(&self, signal: &AvailabilitySignal) -> bool {
        match signal {
            AvailabilitySignal::Binary(name) => self.binary_exists(name),
            AvailabilitySignal::Path(path) => self.path_exists(path),
        }
    }
}

/// Probe backed by the real PATH, filesystem and process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl HostProbe {
    pub fn new() -> Self {
        Self
    }
}

impl Probe for HostProbe {
    fn binary_exists(&self, name: &str) -> bool {
        binary_exists(name)
    }

    fn path_exists(&self, path: &str) -> bool {
        path_exists(path)
    }

    fn os_matches(&self, kind: OsKind) -> bool {
        os_matches(kind)
    }
}

/// Check whether a program is resolvable on PATH.
pub fn binary_exists(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let found = which::which(name).is_ok();
    tracing::trace!(binary = name, found, "probed binary");
    found
}

/// Check whether a path exists after expanding environment variables.
pub fn path_exists(path: &str) -> bool {
    let expanded = expand_path(path);
    let found = Path::new(&expanded).exists();
    tracing::trace!(path, expanded = %expanded, found, "probed path");
    found
}

/// Expand `$VAR`, `${VAR}` and a leading `~` using the process environment.
pub fn expand_path(path: &str) -> String {
    expand_path_with(path, |key| std::env::var(key))
}

/// Expand with a custom env var lookup (for testing).
///
/// Unset variables expand to the empty string.
pub fn expand_path_with<F>(path: &str, env_fn: F) -> String
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let expanded =
        shellexpand::env_with_context_no_errors(path, |key| Some(env_fn(key).unwrap_or_default()));
    shellexpand::tilde(&expanded).into_owned()
}
