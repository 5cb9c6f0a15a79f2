//! Configuration schema definitions for shotit.
//!
//! This module contains all the struct definitions that map to
//! the YAML manifest format.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::steps::condition::Condition;
use crate::steps::entity::{AvailabilitySignal, EntityKind};

/// Root manifest structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Toolset name (for display purposes)
    pub name: String,

    /// Free-form description
    pub description: String,

    /// System package installs, run first
    pub installs: Vec<Install>,

    /// Tool definitions
    pub tools: Vec<Tool>,

    /// Wordlist definitions
    pub wordlists: Vec<Tool>,
}

impl Config {
    /// Entities declared for a tool or wordlist pass.
    ///
    /// Installs have their own shape; asking for them returns an empty slice.
    pub fn entities(&self, kind: EntityKind) -> &[Tool] {
        match kind {
            EntityKind::Tool => &self.tools,
            EntityKind::Wordlist => &self.wordlists,
            EntityKind::Install => &[],
        }
    }
}

/// A package-manager driven install.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Install {
    pub name: String,

    pub description: String,

    /// Candidate managers in declaration order.
    pub commands: PackageManagers,
}

/// One manager's command list inside an install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerCommands {
    /// Manager identifier, probed as a binary name (e.g. `apt`, `brew`).
    pub manager: String,

    /// Commands run in order when this manager is selected.
    pub commands: Vec<String>,
}

/// Ordered mapping of package manager name to commands.
///
/// Stored as a sequence so the YAML declaration order decides which
/// manager wins when several are installed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageManagers(Vec<ManagerCommands>);

impl PackageManagers {
    /// Build from `(manager, commands)` pairs, keeping their order.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<String>)>,
        S: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(manager, commands)| ManagerCommands {
                    manager: manager.into(),
                    commands,
                })
                .collect(),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ManagerCommands> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Manager names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|m| m.manager.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a PackageManagers {
    type Item = &'a ManagerCommands;
    type IntoIter = std::slice::Iter<'a, ManagerCommands>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for PackageManagers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ManagersVisitor;

        impl<'de> Visitor<'de> for ManagersVisitor {
            type Value = PackageManagers;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of package manager names to command lists")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(PackageManagers::default())
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((manager, commands)) =
                    map.next_entry::<String, Option<Vec<String>>>()?
                {
                    entries.push(ManagerCommands {
                        manager,
                        commands: commands.unwrap_or_default(),
                    });
                }
                Ok(PackageManagers(entries))
            }
        }

        deserializer.deserialize_any(ManagersVisitor)
    }
}

/// A tool or wordlist entry.
///
/// Both share one shape; `path` is only consulted for wordlists.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tool {
    pub name: String,

    pub description: String,

    /// Commands run in order when the entry executes.
    pub commands: Vec<Command>,

    /// Only run when this condition holds.
    pub condition: Option<Condition>,

    /// Binary whose presence on PATH means the entry is already satisfied.
    pub binary: Option<String>,

    /// Filesystem path (env vars expanded) that marks a wordlist as present.
    pub path: Option<String>,
}

impl Tool {
    /// Every declared availability signal, binary first.
    ///
    /// Paths only count for wordlists. Blank values are treated as
    /// undeclared.
    pub fn availability_signals(&self, kind: EntityKind) -> Vec<AvailabilitySignal> {
        let mut signals = Vec::new();
        if let Some(binary) = non_blank(&self.binary) {
            signals.push(AvailabilitySignal::Binary(binary.to_string()));
        }
        if kind.uses_path() {
            if let Some(path) = non_blank(&self.path) {
                signals.push(AvailabilitySignal::Path(path.to_string()));
            }
        }
        signals
    }

    /// The signal shown in listings: the binary if declared, else the path.
    pub fn availability_signal(&self, kind: EntityKind) -> Option<AvailabilitySignal> {
        self.availability_signals(kind).into_iter().next()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A single step inside a tool's command list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCommand")]
pub enum Command {
    /// `cmd:` - one required command.
    Single(String),

    /// `or:` - alternatives tried in order until one succeeds.
    Fallback(Vec<String>),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCommand {
    cmd: Option<String>,
    or: Option<Vec<String>>,
}

impl TryFrom<RawCommand> for Command {
    type Error = String;

    fn try_from(raw: RawCommand) -> Result<Self, Self::Error> {
        match (raw.cmd, raw.or) {
            (Some(cmd), None) => Ok(Command::Single(cmd)),
            (None, Some(alternatives)) if alternatives.is_empty() => {
                Err("'or' must list at least one command".to_string())
            }
            (None, Some(alternatives)) => Ok(Command::Fallback(alternatives)),
            (Some(_), Some(_)) => Err("a command takes either 'cmd' or 'or', not both".to_string()),
            (None, None) => Err("a command needs a 'cmd' or an 'or' list".to_string()),
        }
    }
}

impl Command {
    /// Every command string this step may run, in order.
    pub fn command_strings(&self) -> Vec<&str> {
        match self {
            Command::Single(cmd) => vec![cmd.as_str()],
            Command::Fallback(alternatives) => alternatives.iter().map(String::as_str).collect(),
        }
    }
}
