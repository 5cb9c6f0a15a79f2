//! Planner decisions and run results.

use std::collections::HashSet;

use crate::steps::{AvailabilitySignal, Condition, EntityKind};

/// Options controlling a planner run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Walk and report the decision tree without spawning anything.
    pub dry_run: bool,

    /// Report present entities as "skipping" instead of "already installed".
    pub skip_available: bool,

    /// Entity names to skip; exact, case-sensitive match.
    pub skip_names: HashSet<String>,
}

impl RunOptions {
    /// Whether `name` was explicitly listed for skipping.
    pub fn is_skipped(&self, name: &str) -> bool {
        self.skip_names.contains(name)
    }
}

/// Why an entity did not execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Named in the skip list.
    ExplicitlySkipped,

    /// An availability signal resolved present.
    AlreadyAvailable {
        signal: AvailabilitySignal,
        /// The caller asked to skip available entities; only changes wording.
        skip_requested: bool,
    },

    /// Declared condition evaluated false.
    ConditionNotMet(Condition),

    /// None of an install's package managers is on PATH.
    NoPackageManagerFound,
}

/// What the planner decided for an entity before running anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Skip(SkipReason),
    Execute,
}

/// Terminal state of one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityOutcome {
    Skipped(SkipReason),
    Executed {
        /// Package manager used (installs only).
        manager: Option<String>,
        /// Failed commands and exhausted fallback groups.
        failures: usize,
    },
}

/// Result for one declared entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityReport {
    pub kind: EntityKind,
    pub name: String,
    pub outcome: EntityOutcome,
}

impl EntityReport {
    pub fn skipped(kind: EntityKind, name: &str, reason: SkipReason) -> Self {
        Self {
            kind,
            name: name.to_string(),
            outcome: EntityOutcome::Skipped(reason),
        }
    }

    pub fn executed(kind: EntityKind, name: &str, manager: Option<String>, failures: usize) -> Self {
        Self {
            kind,
            name: name.to_string(),
            outcome: EntityOutcome::Executed { manager, failures },
        }
    }

    /// The skip reason, if the entity was skipped.
    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match &self.outcome {
            EntityOutcome::Skipped(reason) => Some(reason),
            EntityOutcome::Executed { .. } => None,
        }
    }

    pub fn was_executed(&self) -> bool {
        matches!(self.outcome, EntityOutcome::Executed { .. })
    }

    /// Failed commands recorded for this entity (zero when skipped).
    pub fn failures(&self) -> usize {
        match self.outcome {
            EntityOutcome::Executed { failures, .. } => failures,
            EntityOutcome::Skipped(_) => 0,
        }
    }
}

/// Everything that happened during a run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub dry_run: bool,
    pub reports: Vec<EntityReport>,
}

impl RunSummary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            reports: Vec::new(),
        }
    }

    /// Reports for one pass.
    pub fn reports_for(&self, kind: EntityKind) -> impl Iterator<Item = &EntityReport> {
        self.reports.iter().filter(move |r| r.kind == kind)
    }

    /// Look up an entity's report by kind and name.
    pub fn report(&self, kind: EntityKind, name: &str) -> Option<&EntityReport> {
        self.reports_for(kind).find(|r| r.name == name)
    }

    pub fn executed(&self) -> usize {
        self.reports.iter().filter(|r| r.was_executed()).count()
    }

    pub fn skipped(&self) -> usize {
        self.reports.len() - self.executed()
    }

    /// Executed entities with at least one failure.
    pub fn failed_entities(&self) -> usize {
        self.reports.iter().filter(|r| r.failures() > 0).count()
    }

    pub fn failed_commands(&self) -> usize {
        self.reports.iter().map(EntityReport::failures).sum()
    }
}
