//! Library integration tests.

use shotit::ShotitError;

#[test]
fn error_types_are_public() {
    let err = ShotitError::ProcessFailed {
        command: "make install".into(),
        code: Some(2),
    };
    assert!(err.to_string().contains("make install"));
    assert!(!err.is_config_error());
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> shotit::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use shotit::cli::{Cli, Mode};

    let cli = Cli::parse_from(["shotit", "-c", "tools.yaml", "-l"]);
    assert_eq!(cli.mode(), Mode::List);

    let cli = Cli::parse_from(["shotit", "--config", "tools.yaml", "--st", "a,b"]);
    assert_eq!(cli.mode(), Mode::Execute);
    assert_eq!(cli.skip_names().len(), 2);
}

#[test]
fn release_profile_is_tuned() {
    let cargo_toml = include_str!("../Cargo.toml");
    assert!(cargo_toml.contains("[profile.release]"));
    assert!(cargo_toml.contains("lto = true"));
    assert!(cargo_toml.contains("strip = true"));
}
