//! The execution planner.
//!
//! Walks installs, then tools, then wordlists, in declared order. Each
//! entity goes through the same gate sequence (skip list, availability,
//! condition) before its commands run. Everything is sequential.
//!
//! Failure policy differs by pass:
//! - Installs abort the rest of the chosen manager's commands at the first
//!   failure.
//! - Tools and wordlists keep going after a failed command; a fallback group
//!   counts as one failure only when every alternative failed.

use tracing::{debug, warn};

use crate::config::schema::{Command, Config, Install, ManagerCommands, Tool};
use crate::detection::select_manager;
use crate::environment::Probe;
use crate::error::ShotitError;
use crate::shell::{execute, CommandRunner};
use crate::steps::{AvailabilitySignal, EntityKind};
use crate::ui::UserInterface;

use super::outcome::{Decision, EntityReport, RunOptions, RunSummary, SkipReason};

/// Orchestrates a full run over a loaded configuration.
pub struct Planner<'a> {
    probe: &'a dyn Probe,
    runner: &'a dyn CommandRunner,
    options: RunOptions,
}

impl<'a> Planner<'a> {
    pub fn new(probe: &'a dyn Probe, runner: &'a dyn CommandRunner, options: RunOptions) -> Self {
        Self {
            probe,
            runner,
            options,
        }
    }

    /// Run all three passes and collect what happened.
    pub fn run(&self, config: &Config, ui: &mut dyn UserInterface) -> RunSummary {
        if self.options.dry_run {
            ui.warning("dry run mode - commands will not be executed");
            ui.blank();
        }

        let mut summary = RunSummary::new(self.options.dry_run);
        summary.reports.extend(self.run_installs(config, ui));
        summary
            .reports
            .extend(self.run_entities(config, EntityKind::Tool, ui));
        summary
            .reports
            .extend(self.run_entities(config, EntityKind::Wordlist, ui));
        summary
    }

    /// Decide what to do with an install: the manager to use, or why not.
    pub fn decide_install<'c>(
        &self,
        install: &'c Install,
    ) -> std::result::Result<&'c ManagerCommands, SkipReason> {
        if self.options.is_skipped(&install.name) {
            return Err(SkipReason::ExplicitlySkipped);
        }
        select_manager(&install.commands, self.probe).ok_or(SkipReason::NoPackageManagerFound)
    }

    /// Decide whether a tool or wordlist runs. Pure: spawns nothing, prints nothing.
    pub fn decide(&self, entity: &Tool, kind: EntityKind) -> Decision {
        if self.options.is_skipped(&entity.name) {
            return Decision::Skip(SkipReason::ExplicitlySkipped);
        }

        if let Some(signal) = entity
            .availability_signals(kind)
            .into_iter()
            .find(|signal| self.probe.signal_present(signal))
        {
            return Decision::Skip(SkipReason::AlreadyAvailable {
                signal,
                skip_requested: self.options.skip_available,
            });
        }

        if let Some(condition) = &entity.condition {
            if !condition.evaluate(self.probe) {
                return Decision::Skip(SkipReason::ConditionNotMet(condition.clone()));
            }
        }

        Decision::Execute
    }

    /// Run the install pass.
    pub fn run_installs(&self, config: &Config, ui: &mut dyn UserInterface) -> Vec<EntityReport> {
        if config.installs.is_empty() {
            return Vec::new();
        }

        let header = ui.theme().format_header("executing installs", &config.name);
        ui.message(&header);
        ui.blank();

        let mut reports = Vec::with_capacity(config.installs.len());
        for install in &config.installs {
            let heading = ui.theme().format_entity(&install.name, &install.description);
            ui.message(&heading);

            let report = match self.decide_install(install) {
                Ok(selected) => {
                    ui.warning(&format!("  using {}", selected.manager));
                    let failures = self.run_strict(&selected.commands, ui);
                    EntityReport::executed(
                        EntityKind::Install,
                        &install.name,
                        Some(selected.manager.clone()),
                        failures,
                    )
                }
                Err(reason) => {
                    report_skip(&install.name, &reason, ui);
                    EntityReport::skipped(EntityKind::Install, &install.name, reason)
                }
            };
            debug!(install = %install.name, outcome = ?report.outcome, "install finished");

            reports.push(report);
            ui.blank();
        }
        reports
    }

    /// Run the tool or wordlist pass.
    pub fn run_entities(
        &self,
        config: &Config,
        kind: EntityKind,
        ui: &mut dyn UserInterface,
    ) -> Vec<EntityReport> {
        let entities = config.entities(kind);
        if entities.is_empty() {
            return Vec::new();
        }

        let label = format!("executing {}", kind.plural());
        let header = ui.theme().format_header(&label, &config.name);
        ui.message(&header);
        ui.blank();

        let mut reports = Vec::with_capacity(entities.len());
        for entity in entities {
            let heading = ui.theme().format_entity(&entity.name, &entity.description);
            ui.message(&heading);

            let decision = self.decide(entity, kind);
            debug!(%kind, name = %entity.name, ?decision, "decided");

            let report = match decision {
                Decision::Skip(reason) => {
                    report_skip(&entity.name, &reason, ui);
                    EntityReport::skipped(kind, &entity.name, reason)
                }
                Decision::Execute => {
                    let failures = entity
                        .commands
                        .iter()
                        .filter(|command| !self.run_command(command, ui))
                        .count();
                    EntityReport::executed(kind, &entity.name, None, failures)
                }
            };

            reports.push(report);
            ui.blank();
        }

        if self.options.dry_run {
            ui.warning("dry run completed - no commands were executed");
        } else {
            match kind {
                EntityKind::Wordlist => ui.success("wordlists installation completed"),
                _ => ui.success("installation completed"),
            }
        }

        reports
    }

    /// Run commands in order, stopping at the first failure.
    ///
    /// Returns the number of failures (0 or 1).
    fn run_strict(&self, commands: &[String], ui: &mut dyn UserInterface) -> usize {
        for command in commands {
            ui.command(command);
            if let Err(e) = execute(self.runner, command, self.options.dry_run) {
                warn!(command = %command, error = %e, "install command failed, aborting install");
                ui.error(&format!("  Error: {}", e));
                return 1;
            }
        }
        0
    }

    /// Run one declared command; returns whether it succeeded.
    fn run_command(&self, command: &Command, ui: &mut dyn UserInterface) -> bool {
        match command {
            Command::Single(cmd) => {
                ui.command(cmd);
                match execute(self.runner, cmd, self.options.dry_run) {
                    Ok(()) => true,
                    Err(e) => {
                        warn!(command = %cmd, error = %e, "command failed, continuing");
                        ui.error(&format!("  Error: {}", e));
                        false
                    }
                }
            }
            Command::Fallback(alternatives) => self.run_fallback(alternatives, ui),
        }
    }

    /// Try alternatives in order until one succeeds.
    ///
    /// Under dry-run every alternative is listed, since none actually ran.
    fn run_fallback(&self, alternatives: &[String], ui: &mut dyn UserInterface) -> bool {
        if self.options.dry_run {
            let mut all_valid = true;
            for alt in alternatives {
                ui.command(alt);
                if let Err(e) = execute(self.runner, alt, true) {
                    ui.error(&format!("    {}", failure_note(&e)));
                    all_valid = false;
                }
            }
            return all_valid;
        }

        for alt in alternatives {
            ui.command(alt);
            match execute(self.runner, alt, false) {
                Ok(()) => {
                    ui.success("    (success)");
                    return true;
                }
                Err(e) => {
                    debug!(command = %alt, error = %e, "fallback alternative failed");
                    ui.error(&format!("    {}", failure_note(&e)));
                }
            }
        }

        ui.error("  all fallback commands failed");
        false
    }
}

fn failure_note(err: &ShotitError) -> String {
    match err {
        ShotitError::EmptyCommand => "(failed: empty command)".to_string(),
        _ => "(failed)".to_string(),
    }
}

/// Print the notice for a skipped entity.
fn report_skip(name: &str, reason: &SkipReason, ui: &mut dyn UserInterface) {
    match reason {
        SkipReason::ExplicitlySkipped => {
            ui.warning(&format!("  skipping - {} specified in skip list", name))
        }
        SkipReason::AlreadyAvailable {
            signal,
            skip_requested: true,
        } => ui.warning(&format!("  skipping - {} already available", signal)),
        SkipReason::AlreadyAvailable {
            signal: AvailabilitySignal::Binary(binary),
            skip_requested: false,
        } => ui.success(&format!("  already installed - {} found", binary)),
        SkipReason::AlreadyAvailable {
            signal: AvailabilitySignal::Path(path),
            skip_requested: false,
        } => ui.success(&format!("  already exists - {} found", path)),
        SkipReason::ConditionNotMet(condition) => {
            ui.warning(&format!("  skipping - condition not met: {}", condition))
        }
        SkipReason::NoPackageManagerFound => ui.warning("  no compatible package manager found"),
    }
}
