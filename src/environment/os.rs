//! Coarse operating system identification.
//!
//! This is a heuristic, not a platform detection library: a `GOOS`
//! override is honoured first, then a well-known marker file. Windows has
//! no marker file and is only recognised through the override.

use std::env::VarError;
use std::fmt;
use std::path::Path;

/// Environment variable that overrides OS detection.
pub const OS_OVERRIDE_VAR: &str = "GOOS";

/// Operating systems a condition can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsKind {
    Linux,
    MacOs,
    Windows,
}

impl OsKind {
    /// Substring looked for (case-insensitively) in the override variable.
    fn override_token(&self) -> &'static str {
        match self {
            OsKind::Linux => "linux",
            OsKind::MacOs => "darwin",
            OsKind::Windows => "windows",
        }
    }

    /// File whose presence identifies the OS.
    fn marker_file(&self) -> Option<&'static str> {
        match self {
            OsKind::Linux => Some("/etc/os-release"),
            OsKind::MacOs => Some("/System/Library/CoreServices/SystemVersion.plist"),
            OsKind::Windows => None,
        }
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OsKind::Linux => "linux",
            OsKind::MacOs => "macos",
            OsKind::Windows => "windows",
        };
        write!(f, "{}", s)
    }
}

/// Check whether the host looks like `kind`.
pub fn os_matches(kind: OsKind) -> bool {
    os_matches_with(kind, |key| std::env::var(key), |path| path.exists())
}

/// Check with a custom env var lookup and file probe (for testing).
pub fn os_matches_with<E, P>(kind: OsKind, env_fn: E, file_exists: P) -> bool
where
    E: Fn(&str) -> Result<String, VarError>,
    P: Fn(&Path) -> bool,
{
    let overridden = env_fn(OS_OVERRIDE_VAR)
        .map(|value| value.to_lowercase().contains(kind.override_token()))
        .unwrap_or(false);

    overridden || kind.marker_file().is_some_and(|marker| file_exists(Path::new(marker)))
}
