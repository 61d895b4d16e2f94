//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Human-friendly output formatting
//! - Turning failures into one message and an exit code

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use weather_core::WeatherError;

mod cli;
mod display;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{err:?}");
            eprintln!("{}", user_message(&err));
            ExitCode::FAILURE
        }
    }
}

/// Fetch errors already carry the exact text for the user; anything else
/// gets its full context chain.
fn user_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<WeatherError>() {
        Some(weather) => weather.to_string(),
        None => format!("{err:#}"),
    }
}
