//! Configuration file loading.
//!
//! The config is read once at startup and never touched again.

use crate::config::schema::Config;
use crate::error::{Result, ShotitError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve a config path against the current directory.
pub fn resolve_config_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}

/// Load and parse a single config file.
///
/// # Errors
///
/// - `ConfigNotFound` if the file doesn't exist
/// - `Io` if it exists but can't be read
/// - `ConfigParseError` if the YAML is invalid
pub fn load_config_file(path: &Path) -> Result<Config> {
    let path = resolve_config_path(path)?;
    debug!(path = %path.display(), "loading config");

    let content = fs::read_to_string(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ShotitError::ConfigNotFound { path: path.clone() }
        } else {
            ShotitError::Io(e)
        }
    })?;

    parse_config(&content, &path)
}

/// Parse YAML content into a [`Config`].
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<Config> {
    serde_yaml::from_str(content).map_err(|e| ShotitError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Command;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
name: recon
description: recon toolkit
installs:
  - name: base
    commands:
      apt: ["apt-get install -y golang"]
      brew: ["brew install go"]
tools:
  - name: nmap
    binary: nmap
    commands:
      - cmd: "echo installing nmap"
wordlists:
  - name: common
    path: "$HOME/wordlists/common.txt"
    commands:
      - or: ["curl -o common.txt x", "wget x"]
"#;

    #[test]
    fn load_config_file_parses_sample() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tools.yaml");
        fs::write(&path, SAMPLE).unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.name, "recon");
        assert_eq!(config.installs[0].commands.names(), vec!["apt", "brew"]);
        assert_eq!(config.tools[0].binary.as_deref(), Some("nmap"));
        assert!(matches!(
            config.wordlists[0].commands[0],
            Command::Fallback(ref alts) if alts.len() == 2
        ));
    }

    #[test]
    fn load_config_file_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yaml");

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ShotitError::ConfigNotFound { .. }));
        assert!(err.is_config_error());
    }

    #[test]
    fn load_config_file_directory_is_io_error() {
        let temp = TempDir::new().unwrap();

        let err = load_config_file(temp.path()).unwrap_err();
        assert!(matches!(err, ShotitError::Io(_)));
    }

    #[test]
    fn parse_config_invalid_yaml_carries_path() {
        let err = parse_config("tools: [unclosed", Path::new("/tmp/bad.yaml")).unwrap_err();
        match err {
            ShotitError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("/tmp/bad.yaml"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_config_rejects_command_with_both_keys() {
        let yaml = r#"
tools:
  - name: t
    commands:
      - cmd: "a"
        or: ["b"]
"#;
        let err = parse_config(yaml, Path::new("t.yaml")).unwrap_err();
        assert!(matches!(err, ShotitError::ConfigParseError { .. }));
    }

    #[test]
    fn parse_config_empty_document_is_default() {
        let config = parse_config("{}", Path::new("t.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn resolve_config_path_makes_relative_absolute() {
        let resolved = resolve_config_path(Path::new("tools.yaml")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("tools.yaml"));
    }
}
