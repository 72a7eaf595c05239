//! Command line flags for `santa-draw`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::OutputFormat;

/// Draw secret santa pairs and notify every participant.
///
/// Flags override the `SANTA_*` environment variables.
#[derive(Debug, Parser)]
#[command(name = "santa-draw", version)]
pub struct Cli {
    /// Participant file: `Name;Contact[;Excluded1,Excluded2,...]` per line,
    /// or a `.json` array. Prompts interactively when omitted.
    pub input: Option<PathBuf>,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum draw attempts before giving up
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Prefix for contacts without one, e.g. +34
    #[arg(long)]
    pub country_prefix: Option<String>,

    /// Message template with {assignor} and {recipient} placeholders
    #[arg(long)]
    pub template: Option<String>,

    /// Notification output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Draw without sending any notification
    #[arg(long)]
    pub dry_run: bool,
}
