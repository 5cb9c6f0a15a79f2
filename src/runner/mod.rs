//! Execution planning and orchestration.
//!
//! - [`Planner`] - walks installs, tools and wordlists and runs commands
//! - [`RunOptions`] - dry-run, skip-available and skip-list settings
//! - [`RunSummary`] - per-entity outcomes of a run

pub mod outcome;
pub mod planner;

pub use outcome::{Decision, EntityOutcome, EntityReport, RunOptions, RunSummary, SkipReason};
pub use planner::Planner;
