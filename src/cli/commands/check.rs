//! Binary-check command implementation.
//!
//! `shotit --binary-check` reports which declared binaries and wordlist
//! paths are already present, without running anything.

use std::path::{Path, PathBuf};

use crate::config::{load_config_file, Config};
use crate::environment::{HostProbe, Probe};
use crate::error::Result;
use crate::steps::EntityKind;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Counts produced by a binary check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailabilityReport {
    pub available: usize,
    pub unavailable: usize,
}

/// The binary-check command implementation.
pub struct CheckCommand {
    config_path: PathBuf,
}

impl CheckCommand {
    /// Create a new binary-check command.
    pub fn new(config_path: &Path) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config_file(&self.config_path)?;
        check_config(&config, &HostProbe::new(), ui);
        Ok(CommandResult::success())
    }
}

/// Probe every tool and wordlist and print one line each.
///
/// Entities without a binary or path are listed but not counted.
pub fn check_config(
    config: &Config,
    probe: &dyn Probe,
    ui: &mut dyn UserInterface,
) -> AvailabilityReport {
    let header = ui.theme().format_header("binary check", &config.name);
    ui.message(&header);
    ui.blank();

    let mut report = AvailabilityReport::default();
    for kind in [EntityKind::Tool, EntityKind::Wordlist] {
        for entity in config.entities(kind) {
            let signals = entity.availability_signals(kind);
            let Some(first) = signals.first() else {
                let missing = if kind.uses_path() {
                    "no binary/path specified"
                } else {
                    "no binary specified"
                };
                let line = format!("  - {} ({})", entity.name, missing);
                let line = ui.theme().dim.apply_to(line).to_string();
                ui.message(&line);
                continue;
            };

            match signals.iter().find(|s| probe.signal_present(s)) {
                Some(found) => {
                    report.available += 1;
                    ui.success(&format!("  ✓ {} ({})", found, entity.name));
                }
                None => {
                    report.unavailable += 1;
                    ui.error(&format!("  ✗ {} ({})", first, entity.name));
                }
            }
        }
    }

    ui.blank();
    ui.message(&format!(
        "{} available, {} unavailable",
        report.available, report.unavailable
    ));
    report
}
