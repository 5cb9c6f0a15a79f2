//! Host environment probing.
//!
//! - [`probe`] - PATH lookups, path existence and the [`Probe`] trait
//! - [`os`] - coarse OS identification used by conditions

pub mod os;
pub mod probe;

pub use os::{os_matches, os_matches_with, OsKind, OS_OVERRIDE_VAR};
pub use probe::{
    binary_exists, expand_path, expand_path_with, path_exists, HostProbe, Probe,
};
