//! Entity model shared by the planner and the reporting commands.
//!
//! - [`Condition`] - parsed `condition:` values and their evaluation
//! - [`EntityKind`] - install, tool or wordlist
//! - [`AvailabilitySignal`] - binary or path that marks an entity as present

pub mod condition;
pub mod entity;

pub use condition::Condition;
pub use entity::{AvailabilitySignal, EntityKind};
