//! Run command implementation.
//!
//! The default mode: load the config, warn about suspicious entries, then
//! execute installs, tools and wordlists.

use std::path::{Path, PathBuf};

use crate::config::{load_config_file, validate_config, Config};
use crate::environment::{HostProbe, Probe};
use crate::error::Result;
use crate::runner::{Planner, RunOptions, RunSummary};
use crate::shell::{CommandRunner, ShellRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    config_path: PathBuf,
    options: RunOptions,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(config_path: &Path, options: RunOptions) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            options,
        }
    }

    /// Get the config file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get the run options.
    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Run an already loaded config against the given host.
    pub fn run_config(
        &self,
        config: &Config,
        probe: &dyn Probe,
        runner: &dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> RunSummary {
        let issues = validate_config(config);
        for issue in &issues {
            ui.warning(&format!("warning: {}", issue));
        }
        if !issues.is_empty() {
            ui.blank();
        }

        let planner = Planner::new(probe, runner, self.options.clone());
        let summary = planner.run(config, ui);

        if !summary.reports.is_empty() {
            ui.blank();
            ui.message(&summary_line(&summary));
        }
        summary
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config_file(&self.config_path)?;
        self.run_config(&config, &HostProbe::new(), &ShellRunner, ui);

        // Command failures are reported, never turned into an exit code.
        Ok(CommandResult::success())
    }
}

/// One-line tally printed after a run.
pub fn summary_line(summary: &RunSummary) -> String {
    let verb = if summary.dry_run { "would execute" } else { "executed" };
    format!(
        "summary: {} {}, {} skipped, {} failed ({} failed commands)",
        verb,
        summary.executed(),
        summary.skipped(),
        summary.failed_entities(),
        summary.failed_commands()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::environment::OsKind;
    use crate::error::ShotitError;
    use crate::runner::EntityReport;
    use crate::steps::EntityKind;
    use crate::ui::MockUI;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    struct Host;

    impl Probe for Host {
        fn binary_exists(&self, name: &str) -> bool {
            name == "nmap"
        }
        fn path_exists(&self, _path: &str) -> bool {
            false
        }
        fn os_matches(&self, kind: OsKind) -> bool {
            kind == OsKind::Linux
        }
    }

    #[derive(Default)]
    struct Recorder {
        spawned: RefCell<Vec<String>>,
    }

    impl CommandRunner for Recorder {
        fn spawn(&self, command: &str) -> Result<()> {
            self.spawned.borrow_mut().push(command.to_string());
            if command.starts_with("false") {
                return Err(ShotitError::ProcessFailed {
                    command: command.to_string(),
                    code: Some(1),
                });
            }
            Ok(())
        }
    }

    const CONFIG: &str = r#"
name: recon
tools:
  - name: nmap
    binary: nmap
    commands:
      - cmd: "echo installing nmap"
  - name: ffuf
    commands:
      - cmd: "go install ffuf"
      - cmd: "false"
  - name: winonly
    condition: windows
    commands:
      - cmd: "choco install x"
"#;

    fn run(options: RunOptions, yaml: &str) -> (RunSummary, MockUI, Vec<String>) {
        let config = parse_config(yaml, Path::new("t.yaml")).unwrap();
        let cmd = RunCommand::new(Path::new("t.yaml"), options);
        let runner = Recorder::default();
        let mut ui = MockUI::new();
        let summary = cmd.run_config(&config, &Host, &runner, &mut ui);
        let spawned = runner.spawned.into_inner();
        (summary, ui, spawned)
    }

    #[test]
    fn run_reports_summary_line() {
        let (summary, ui, spawned) = run(RunOptions::default(), CONFIG);

        assert_eq!(spawned, ["go install ffuf", "false"]);
        assert_eq!(summary.executed(), 1);
        assert_eq!(summary.skipped(), 2);
        assert!(ui.has_message("summary: executed 1, 2 skipped, 1 failed (1 failed commands)"));
    }

    #[test]
    fn dry_run_summary_says_would_execute() {
        let options = RunOptions {
            dry_run: true,
            ..Default::default()
        };
        let (_, ui, spawned) = run(options, CONFIG);

        assert!(spawned.is_empty());
        assert!(ui.has_message("summary: would execute 1"));
    }

    #[test]
    fn validation_warnings_are_printed_before_run() {
        let yaml = r#"
tools:
  - name: t
    commands:
      - cmd: ""
"#;
        let (_, ui, _) = run(RunOptions::default(), yaml);

        assert!(ui.has_warning("warning: tool 't' contains a blank command"));
        assert_eq!(ui.transcript()[0], "warning: tool 't' contains a blank command (blank-command)");
    }

    #[test]
    fn empty_config_prints_nothing() {
        let (summary, ui, _) = run(RunOptions::default(), "name: empty\n");
        assert!(summary.reports.is_empty());
        assert!(ui.transcript().is_empty());
    }

    #[test]
    fn summary_line_counts() {
        let mut summary = RunSummary::new(false);
        summary
            .reports
            .push(EntityReport::executed(EntityKind::Tool, "a", None, 2));
        assert_eq!(
            summary_line(&summary),
            "summary: executed 1, 0 skipped, 1 failed (2 failed commands)"
        );
    }

    #[test]
    fn execute_missing_config_is_config_error() {
        let temp = TempDir::new().unwrap();
        let cmd = RunCommand::new(&temp.path().join("nope.yaml"), RunOptions::default());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(err.is_config_error());
    }

    #[cfg(unix)]
    #[test]
    fn execute_runs_real_commands() {
        let temp = TempDir::new().unwrap();
        let marker = temp.path().join("marker");
        let path = temp.path().join("tools.yaml");
        let yaml = format!(
            "tools:\n  - name: touch\n    commands:\n      - cmd: \"touch '{}'\"\n",
            marker.display()
        );
        fs::write(&path, yaml).unwrap();
        let cmd = RunCommand::new(&path, RunOptions::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(marker.exists());
        assert_eq!(cmd.config_path(), path.as_path());
        assert!(!cmd.options().dry_run);
    }
}
