//! Entity kinds and availability signals.

use std::fmt;

/// The three kinds of declared entity, in the order their passes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Install,
    Tool,
    Wordlist,
}

impl EntityKind {
    /// Plural label used in pass headers ("executing tools: ...").
    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Install => "installs",
            EntityKind::Tool => "tools",
            EntityKind::Wordlist => "wordlists",
        }
    }

    /// Whether a filesystem path can mark this kind as already present.
    pub fn uses_path(&self) -> bool {
        matches!(self, EntityKind::Wordlist)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Install => "install",
            EntityKind::Tool => "tool",
            EntityKind::Wordlist => "wordlist",
        };
        write!(f, "{}", s)
    }
}

/// Evidence that an entity's setup is already satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilitySignal {
    /// Program resolvable on PATH.
    Binary(String),
    /// Filesystem entry, environment variables expanded before checking.
    Path(String),
}

impl AvailabilitySignal {
    /// The declared value, as written in the manifest.
    pub fn value(&self) -> &str {
        match self {
            AvailabilitySignal::Binary(v) | AvailabilitySignal::Path(v) => v,
        }
    }
}

impl fmt::Display for AvailabilitySignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
