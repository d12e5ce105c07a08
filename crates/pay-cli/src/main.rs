//! # gateway-select
//!
//! Pick a payment gateway by number and process one payment.
//!
//! ## Usage
//!
//! ```bash
//! # Optional settings
//! export PAYMENT_CURRENCY=eur
//! export RUST_LOG=debug
//!
//! gateway-select
//! ```

use anyhow::Context;
use pay_cli::{AppConfig, InteractionLoop, LogFormat, SessionOutcome};
use pay_gateways::default_registry;
use std::io;
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<ExitCode> {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return Ok(ExitCode::from(err.exit_code()));
        }
    };

    init_tracing(config.log_format)?;

    let registry = default_registry();
    info!("Payment providers: {:?}", registry.names());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session =
        InteractionLoop::new(&registry, stdin.lock(), stdout.lock()).with_currency(config.currency);

    match session.run() {
        Ok(SessionOutcome::Completed { provider, status }) => {
            info!(%provider, ?status, "Session finished");
            Ok(ExitCode::SUCCESS)
        }
        // Reported to the user already; not treated as a process failure
        Ok(SessionOutcome::InvalidAmount) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("Error: {}", err);
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}

/// Logs go to stderr so stdout carries only the session transcript.
fn init_tracing(format: LogFormat) -> anyhow::Result<()> {
    let (text, json) = match format {
        LogFormat::Text => (Some(fmt::layer().with_writer(io::stderr)), None),
        LogFormat::Json => (None, Some(fmt::layer().json().with_writer(io::stderr))),
    };

    tracing_subscriber::registry()
        .with(text)
        .with(json)
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")
}
