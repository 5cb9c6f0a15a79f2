//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//! - Warnings in [`validator`]
//!
//! # Example
//!
//! ```
//! use shotit::config::{load_config_file, validate_config};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("tools.yaml");
//! fs::write(&path, "name: recon\ntools:\n  - name: nmap\n    binary: nmap\n").unwrap();
//!
//! let config = load_config_file(&path).unwrap();
//! assert_eq!(config.name, "recon");
//! assert!(validate_config(&config).is_empty());
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use schema::{Command, Config, Install, ManagerCommands, PackageManagers, Tool};

pub use loader::{load_config_file, parse_config, resolve_config_path};

pub use validator::{validate_config, ValidationIssue};
