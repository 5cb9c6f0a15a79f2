//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{ArgGroup, Parser};
use std::collections::HashSet;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  shotit -c tools.yaml                 Install everything declared
  shotit -c tools.yaml --dry-run       Show what would run
  shotit -c tools.yaml --list          List installs, tools and wordlists
  shotit -c tools.yaml --binary-check  Report which binaries are present
  shotit -c tools.yaml --skip          Skip tools that are already available
  shotit -c tools.yaml -t gau,ffuf     Skip the named entries";

/// shotit - Declarative toolset installer.
#[derive(Debug, Parser)]
#[command(name = "shotit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = EXAMPLES)]
#[command(group(ArgGroup::new("mode").args(["list", "binary_check"])))]
pub struct Cli {
    /// Path to the YAML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Show what would run without executing anything
    #[arg(long, visible_alias = "dry")]
    pub dry_run: bool,

    /// List installs, tools and wordlists, then exit
    #[arg(short, long)]
    pub list: bool,

    /// Check which declared binaries are available, then exit
    #[arg(short, long, visible_alias = "bc")]
    pub binary_check: bool,

    /// Skip tools whose binary or path is already available
    #[arg(short, long, visible_alias = "skip")]
    pub skip_available: bool,

    /// Comma-separated names of installs, tools or wordlists to skip
    #[arg(short = 't', long, visible_alias = "st", value_name = "NAMES")]
    pub skip_tools: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// What a single invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    BinaryCheck,
    Execute,
}

impl Cli {
    /// The active mode; list and binary-check are mutually exclusive.
    pub fn mode(&self) -> Mode {
        if self.list {
            Mode::List
        } else if self.binary_check {
            Mode::BinaryCheck
        } else {
            Mode::Execute
        }
    }

    /// Names from `--skip-tools`, trimmed, with empty items dropped.
    pub fn skip_names(&self) -> HashSet<String> {
        self.skip_tools
            .as_deref()
            .map(parse_skip_list)
            .unwrap_or_default()
    }
}

/// Split a comma-delimited skip list.
pub fn parse_skip_list(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("shotit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn config_is_required() {
        let err = Cli::try_parse_from(["shotit", "--list"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn default_mode_is_execute() {
        let cli = parse(&["-c", "tools.yaml"]);
        assert_eq!(cli.mode(), Mode::Execute);
        assert_eq!(cli.config, PathBuf::from("tools.yaml"));
        assert!(!cli.dry_run);
        assert!(cli.skip_names().is_empty());
    }

    #[test]
    fn list_and_binary_check_modes() {
        assert_eq!(parse(&["-c", "t.yaml", "--list"]).mode(), Mode::List);
        assert_eq!(parse(&["-c", "t.yaml", "-b"]).mode(), Mode::BinaryCheck);
        assert_eq!(parse(&["-c", "t.yaml", "--bc"]).mode(), Mode::BinaryCheck);
    }

    #[test]
    fn list_conflicts_with_binary_check() {
        let err = Cli::try_parse_from(["shotit", "-c", "t.yaml", "-l", "-b"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn aliases_are_accepted() {
        let cli = parse(&["-c", "t.yaml", "--dry", "--skip", "--st", "gau"]);
        assert!(cli.dry_run);
        assert!(cli.skip_available);
        assert!(cli.skip_names().contains("gau"));
    }

    #[test]
    fn skip_list_is_trimmed_and_filtered() {
        let names = parse_skip_list(" gau, ffuf ,,  ,nuclei");
        let mut names: Vec<_> = names.into_iter().collect();
        names.sort();
        assert_eq!(names, ["ffuf", "gau", "nuclei"]);
    }

    #[test]
    fn skip_list_keeps_case() {
        let names = parse_skip_list("Gau");
        assert!(names.contains("Gau"));
        assert!(!names.contains("gau"));
    }
}
