//! Configuration sanity checks.
//!
//! Nothing here is fatal. Issues are reported as warnings before a run:
//! - Entity names should be unique within a pass
//! - Installs should declare at least one package manager
//! - Command strings should not be blank
//! - Conditions should not be empty

use crate::config::schema::{Config, Install, Tool};
use crate::steps::{Condition, EntityKind};
use std::collections::HashSet;
use std::fmt;

/// A validation warning with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Rule identifier
    pub rule: &'static str,
    /// Human-readable message
    pub message: String,
    /// Entity the issue belongs to, if any
    pub entity: Option<String>,
}

impl ValidationIssue {
    fn new(rule: &'static str, entity: &str, message: String) -> Self {
        Self {
            rule,
            message,
            entity: Some(entity.to_string()),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.rule)
    }
}

/// Check a configuration and return every issue found.
pub fn validate_config(config: &Config) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    issues.extend(duplicate_names(
        EntityKind::Install,
        config.installs.iter().map(|i| i.name.as_str()),
    ));
    for install in &config.installs {
        issues.extend(validate_install(install));
    }

    for kind in [EntityKind::Tool, EntityKind::Wordlist] {
        let entities = config.entities(kind);
        issues.extend(duplicate_names(kind, entities.iter().map(|t| t.name.as_str())));
        for entity in entities {
            issues.extend(validate_entity(kind, entity));
        }
    }

    issues
}

fn duplicate_names<'a>(
    kind: EntityKind,
    names: impl Iterator<Item = &'a str>,
) -> Vec<ValidationIssue> {
    let mut seen = HashSet::new();
    let mut issues = Vec::new();
    for name in names {
        if !seen.insert(name) {
            issues.push(ValidationIssue::new(
                "duplicate-name",
                name,
                format!("{} '{}' is declared more than once", kind, name),
            ));
        }
    }
    issues
}

fn validate_install(install: &Install) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if install.commands.is_empty() {
        issues.push(ValidationIssue::new(
            "no-package-managers",
            &install.name,
            format!("install '{}' declares no package managers", install.name),
        ));
    }

    for entry in &install.commands {
        if entry.commands.is_empty() {
            issues.push(ValidationIssue::new(
                "empty-manager-commands",
                &install.name,
                format!(
                    "install '{}' has no commands for '{}'",
                    install.name, entry.manager
                ),
            ));
        }
        if entry.commands.iter().any(|c| c.trim().is_empty()) {
            issues.push(blank_command(EntityKind::Install, &install.name));
        }
    }

    issues
}

fn validate_entity(kind: EntityKind, entity: &Tool) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let has_blank = entity
        .commands
        .iter()
        .flat_map(|c| c.command_strings())
        .any(|c| c.trim().is_empty());
    if has_blank {
        issues.push(blank_command(kind, &entity.name));
    }

    if let Some(Condition::Binary(name)) = &entity.condition {
        if name.trim().is_empty() {
            issues.push(ValidationIssue::new(
                "empty-condition",
                &entity.name,
                format!(
                    "{} '{}' has an empty condition and will always be skipped",
                    kind, entity.name
                ),
            ));
        }
    }

    issues
}

fn blank_command(kind: EntityKind, name: &str) -> ValidationIssue {
    ValidationIssue::new(
        "blank-command",
        name,
        format!("{} '{}' contains a blank command", kind, name),
    )
}
