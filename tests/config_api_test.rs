//! Integration tests for config module public API.

use shotit::config::{
    load_config_file, parse_config, validate_config, Command, Config, PackageManagers,
};
use shotit::steps::{AvailabilitySignal, Condition, EntityKind};
use shotit::ShotitError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn public_api_is_accessible() {
    let _config = Config::default();
    let _managers = PackageManagers::default();
    let _command = Command::Single("echo hi".to_string());
}

#[test]
fn full_config_workflow() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("recon.yaml");
    fs::write(
        &path,
        r#"
name: recon
description: bug bounty toolkit
installs:
  - name: golang
    description: go toolchain
    commands:
      pacman: ["sudo pacman -S --noconfirm go"]
      apt: ["sudo apt-get update", "sudo apt-get install -y golang"]
      brew: ["brew install go"]
tools:
  - name: gau
    description: fetch known urls
    condition: go
    binary: gau
    commands:
      - cmd: "go install github.com/lc/gau/v2/cmd/gau@latest"
  - name: massdns
    condition: linux
    commands:
      - or:
          - "sudo apt-get install -y massdns"
          - "git clone https://github.com/blechschmidt/massdns && make -C massdns"
wordlists:
  - name: seclists
    binary: seclists
    path: "$HOME/wordlists/SecLists"
    commands:
      - cmd: "git clone --depth 1 https://github.com/danielmiessler/SecLists $HOME/wordlists/SecLists"
"#,
    )
    .unwrap();

    let config = load_config_file(&path).unwrap();
    assert!(validate_config(&config).is_empty());

    assert_eq!(config.name, "recon");
    assert_eq!(config.installs[0].commands.names(), ["pacman", "apt", "brew"]);
    assert_eq!(config.tools[0].condition, Some(Condition::Binary("go".into())));
    assert_eq!(config.tools[1].condition, Some(Condition::Linux));
    assert_eq!(
        config.tools[1].commands[0].command_strings().len(),
        2,
        "fallback keeps every alternative"
    );
    assert_eq!(
        config.wordlists[0].availability_signals(EntityKind::Wordlist),
        [
            AvailabilitySignal::Binary("seclists".into()),
            AvailabilitySignal::Path("$HOME/wordlists/SecLists".into()),
        ]
    );
}

#[test]
fn manager_order_follows_the_file() {
    let config = parse_config(
        r#"
installs:
  - name: a
    commands:
      zypper: ["zypper in go"]
      apk: ["apk add go"]
      brew: ["brew install go"]
      apt: ["apt install go"]
"#,
        Path::new("order.yaml"),
    )
    .unwrap();

    assert_eq!(
        config.installs[0].commands.names(),
        ["zypper", "apk", "brew", "apt"]
    );
}

#[test]
fn command_needs_exactly_one_form() {
    for yaml in [
        "tools:\n  - name: t\n    commands:\n      - {}\n",
        "tools:\n  - name: t\n    commands:\n      - or: []\n",
        "tools:\n  - name: t\n    commands:\n      - cmd: a\n        or: [b]\n",
    ] {
        let err = parse_config(yaml, Path::new("t.yaml")).unwrap_err();
        assert!(
            matches!(err, ShotitError::ConfigParseError { .. }),
            "expected parse error for {yaml:?}"
        );
    }
}

#[test]
fn missing_file_is_config_error() {
    let temp = TempDir::new().unwrap();
    let err = load_config_file(&temp.path().join("nope.yaml")).unwrap_err();
    assert!(err.is_config_error());
    assert!(matches!(err, ShotitError::ConfigNotFound { .. }));
}
