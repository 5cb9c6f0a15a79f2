//! shotit - Declarative toolset installer.
//!
//! shotit reads a YAML file declaring installs, tools and wordlists and
//! runs the shell commands needed to set them up, skipping anything that
//! is already present or doesn't apply to this host.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`detection`] - Package manager selection
//! - [`environment`] - Binary, path and OS probing
//! - [`error`] - Error types and result aliases
//! - [`runner`] - The execution planner
//! - [`shell`] - Shell command execution
//! - [`steps`] - Entity kinds, availability signals and conditions
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use shotit::config::parse_config;
//! use shotit::environment::HostProbe;
//! use shotit::runner::{Decision, Planner, RunOptions};
//! use shotit::shell::ShellRunner;
//! use shotit::steps::EntityKind;
//! use std::path::Path;
//!
//! let config = parse_config(
//!     "tools:\n  - name: winonly\n    condition: windows\n    commands:\n      - cmd: choco install x\n",
//!     Path::new("tools.yaml"),
//! )
//! .unwrap();
//!
//! let probe = HostProbe::new();
//! let planner = Planner::new(&probe, &ShellRunner, RunOptions::default());
//! let decision = planner.decide(&config.tools[0], EntityKind::Tool);
//! # if !cfg!(windows) {
//! assert!(matches!(decision, Decision::Skip(_)));
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod environment;
pub mod error;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod ui;

pub use error::{Result, ShotitError};
