//! Draw configuration.
//!
//! Values come from the environment with sensible defaults; command line
//! flags override them.

use std::path::PathBuf;
use std::str::FromStr;

use santa_engine::{EngineConfig, DEFAULT_MAX_ATTEMPTS};

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::notify::MessageTemplate;

/// How notifications are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `contact: message` lines
    #[default]
    Console,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!("unknown output format: {other}"))),
        }
    }
}

/// Configuration for one draw.
#[derive(Debug, Clone)]
pub struct DrawConfig {
    /// Participant file; `None` prompts interactively
    pub input: Option<PathBuf>,

    /// Maximum draw attempts before giving up
    pub max_attempts: usize,

    /// Fixed seed for a reproducible draw
    pub seed: Option<u64>,

    /// Prefix for contacts without one, e.g. `+34`
    pub country_prefix: Option<String>,

    /// Message sent to every assignor
    pub template: MessageTemplate,

    /// Notification output format
    pub format: OutputFormat,

    /// Skip sending notifications
    pub dry_run: bool,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            input: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
            country_prefix: None,
            template: MessageTemplate::default(),
            format: OutputFormat::default(),
            dry_run: false,
        }
    }
}

impl DrawConfig {
    /// Create config from environment variables with sensible defaults.
    ///
    /// - `SANTA_MAX_ATTEMPTS`
    /// - `SANTA_SEED`
    /// - `SANTA_COUNTRY_PREFIX`
    /// - `SANTA_MESSAGE_TEMPLATE`
    /// - `SANTA_OUTPUT` (`console` or `json`)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("SANTA_MAX_ATTEMPTS") {
            config.max_attempts = parse_number("SANTA_MAX_ATTEMPTS", &value)?;
        }
        if let Some(value) = lookup("SANTA_SEED") {
            config.seed = Some(parse_number("SANTA_SEED", &value)?);
        }
        config.country_prefix =
            lookup("SANTA_COUNTRY_PREFIX").and_then(|prefix| normalize_prefix(&prefix));
        if let Some(value) = lookup("SANTA_MESSAGE_TEMPLATE") {
            config.template = MessageTemplate::new(value)?;
        }
        if let Some(value) = lookup("SANTA_OUTPUT") {
            config.format = value.parse()?;
        }

        Ok(config)
    }

    /// Apply command line flags on top of this configuration.
    pub fn with_overrides(mut self, cli: &Cli) -> Result<Self> {
        if let Some(input) = &cli.input {
            self.input = Some(input.clone());
        }
        if let Some(max_attempts) = cli.max_attempts {
            self.max_attempts = max_attempts;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(prefix) = &cli.country_prefix {
            self.country_prefix = normalize_prefix(prefix);
        }
        if let Some(template) = &cli.template {
            self.template = MessageTemplate::new(template.clone())?;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        self.dry_run |= cli.dry_run;
        Ok(self)
    }

    /// Engine configuration for this draw.
    pub fn engine(&self) -> EngineConfig {
        EngineConfig::default().with_max_attempts(self.max_attempts)
    }
}

/// Trimmed prefix; blank means no prefix.
fn normalize_prefix(prefix: &str) -> Option<String> {
    let prefix = prefix.trim();
    (!prefix.is_empty()).then(|| prefix.to_string())
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("invalid {key}: {value:?}")))
}
