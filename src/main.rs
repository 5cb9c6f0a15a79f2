//! shotit CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use shotit::cli::{Cli, CommandDispatcher};
use shotit::ui::{TerminalUI, Theme, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("shotit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shotit=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("shotit starting with args: {:?}", cli);

    let theme = if cli.no_color {
        Theme::plain()
    } else {
        Theme::detect()
    };
    let mut ui = TerminalUI::with_theme(theme);

    let dispatcher = CommandDispatcher::new(cli.config.clone());

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            if e.is_config_error() {
                tracing::debug!(error = ?e, "config load failed");
            } else {
                tracing::error!(error = ?e, "internal error");
            }
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
