//! santa-draw binary
//!
//! Reads participants, draws secret santa pairs and writes one notification
//! per participant.

use std::io;

use clap::Parser;
use santa_cli::{
    input, Cli, ConsoleNotifier, DrawConfig, DryRunNotifier, JsonLinesNotifier, OutputFormat,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only notifications
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "santa=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = DrawConfig::from_env()?.with_overrides(&cli)?;

    let records = match &config.input {
        Some(path) => {
            tracing::info!(path = %path.display(), "reading participants");
            input::read_file(path)?
        }
        None => input::prompt(io::stdin().lock(), io::stderr())?,
    };

    let stdout = io::stdout().lock();
    let summary = if config.dry_run {
        let mut notifier = DryRunNotifier::new();
        santa_cli::run(records, &config, &mut notifier)?
    } else {
        match config.format {
            OutputFormat::Console => {
                santa_cli::run(records, &config, &mut ConsoleNotifier::new(stdout))?
            }
            OutputFormat::Json => {
                santa_cli::run(records, &config, &mut JsonLinesNotifier::new(stdout))?
            }
        }
    };

    tracing::info!(
        participants = summary.participants,
        attempts = summary.attempts,
        notified = summary.notified,
        dry_run = config.dry_run,
        "draw finished"
    );

    Ok(())
}
