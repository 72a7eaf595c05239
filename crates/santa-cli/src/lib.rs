//! Santa Draw Command
//!
//! The outer surfaces around the assignment engine: reading participants,
//! configuration, and handing every assignor their message through a
//! [`Notifier`].
//!
//! # Architecture
//!
//! - **Input**: text (`Name;Contact[;Exclusions]`), JSON, or interactive prompt
//! - **Config**: `SANTA_*` environment variables overridden by flags
//! - **Draw**: registry → engine → one notification per assignor
//! - **Notify**: console, JSON lines, or dry run

pub mod cli;
pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod notify;

pub use cli::Cli;
pub use config::{DrawConfig, OutputFormat};
pub use draw::{run, DrawSummary};
pub use error::{Error, Result};
pub use notify::{
    ConsoleNotifier, DryRunNotifier, JsonLinesNotifier, MessageTemplate, Notifier,
};
