//! Run conditions for tools and wordlists.
//!
//! A condition is either one of the known OS names or the name of a
//! binary that must be on PATH.

use serde::Deserialize;
use std::fmt;

use crate::environment::{OsKind, Probe};

/// A parsed `condition:` value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Condition {
    Linux,
    MacOs,
    Windows,
    /// Named binary must be resolvable on PATH.
    Binary(String),
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        match value.as_str() {
            "linux" => Condition::Linux,
            "macos" => Condition::MacOs,
            "windows" => Condition::Windows,
            _ => Condition::Binary(value),
        }
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        Condition::from(value.to_string())
    }
}

impl Condition {
    /// The OS this condition names, if it is an OS condition.
    pub fn os_kind(&self) -> Option<OsKind> {
        match self {
            Condition::Linux => Some(OsKind::Linux),
            Condition::MacOs => Some(OsKind::MacOs),
            Condition::Windows => Some(OsKind::Windows),
            Condition::Binary(_) => None,
        }
    }

    /// Resolve the condition against the host.
    pub fn evaluate(&self, probe: &dyn Probe) -> bool {
        let met = match self {
            Condition::Linux => probe.os_matches(OsKind::Linux),
            Condition::MacOs => probe.os_matches(OsKind::MacOs),
            Condition::Windows => probe.os_matches(OsKind::Windows),
            Condition::Binary(name) => probe.binary_exists(name),
        };
        tracing::debug!(condition = %self, met, "evaluated condition");
        met
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Condition::Linux => "linux",
            Condition::MacOs => "macos",
            Condition::Windows => "windows",
            Condition::Binary(name) => name.as_str(),
        };
        write!(f, "{}", s)
    }
}
