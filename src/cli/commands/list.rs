//! List command implementation.
//!
//! `shotit --list` prints what a config declares without running anything.

use std::path::{Path, PathBuf};

use crate::config::{load_config_file, Config, Tool};
use crate::environment::{HostProbe, Probe};
use crate::error::Result;
use crate::steps::EntityKind;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    config_path: PathBuf,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(config_path: &Path) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
        }
    }

    /// Get the config file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config_file(&self.config_path)?;
        list_config(&config, &HostProbe::new(), ui);
        Ok(CommandResult::success())
    }
}

/// Print the config's installs, tools and wordlists.
pub fn list_config(config: &Config, probe: &dyn Probe, ui: &mut dyn UserInterface) {
    let header = ui.theme().format_header("Config", &config.name);
    ui.message(&header);
    if !config.description.is_empty() {
        let description = ui.theme().format_header("Description", &config.description);
        ui.message(&description);
    }

    if !config.installs.is_empty() {
        section(ui, "Installs");
        for install in &config.installs {
            let managers = install.commands.names().join(", ");
            let line = format!(
                "  {}{} ({})",
                ui.theme().entity.apply_to(&install.name),
                describe(&install.description),
                ui.theme().dim.apply_to(managers)
            );
            ui.message(&line);
        }
    }

    for kind in [EntityKind::Tool, EntityKind::Wordlist] {
        let entities = config.entities(kind);
        if entities.is_empty() {
            continue;
        }
        section(ui, section_label(kind));
        for entity in entities {
            let line = entity_line(entity, kind, probe, ui);
            ui.message(&line);
        }
    }
}

fn section(ui: &mut dyn UserInterface, label: &str) {
    ui.blank();
    let line = format!("{}", ui.theme().key.apply_to(format!("{}:", label)));
    ui.message(&line);
}

fn section_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Install => "Installs",
        EntityKind::Tool => "Tools",
        EntityKind::Wordlist => "Wordlists",
    }
}

fn describe(description: &str) -> String {
    if description.is_empty() {
        String::new()
    } else {
        format!(" - {}", description)
    }
}

fn entity_line(entity: &Tool, kind: EntityKind, probe: &dyn Probe, ui: &dyn UserInterface) -> String {
    let theme = ui.theme();
    let mut line = format!(
        "  {}{}",
        theme.entity.apply_to(&entity.name),
        describe(&entity.description)
    );
    if let Some(signal) = entity.availability_signal(kind) {
        let present = probe.signal_present(&signal);
        let shown = format!("[{}]", signal.value());
        line.push(' ');
        line.push_str(&theme.format_presence(&shown, present));
    }
    line
}
