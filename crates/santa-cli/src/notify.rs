//! Result sinks.
//!
//! A [`Notifier`] delivers one message to one contact. The draw calls it
//! once per assignor after the engine has produced a verified assignment.
//! Delivery, retries and provider details belong to the implementation.

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Placeholder replaced with the assignor's name.
pub const ASSIGNOR_PLACEHOLDER: &str = "{assignor}";

/// Placeholder replaced with the recipient's name.
pub const RECIPIENT_PLACEHOLDER: &str = "{recipient}";

/// Message sent when no template is configured.
pub const DEFAULT_TEMPLATE: &str = "{assignor}, you are the secret santa of {recipient}";

/// Delivers a message to a contact.
pub trait Notifier {
    /// Send `message` to `contact`.
    fn send(&mut self, contact: &str, message: &str) -> Result<()>;
}

/// Message text with `{assignor}` and `{recipient}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate(String);

impl MessageTemplate {
    /// Create a template. It must mention the recipient.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(RECIPIENT_PLACEHOLDER) {
            return Err(Error::Config(format!(
                "message template must contain {RECIPIENT_PLACEHOLDER}: {template:?}"
            )));
        }
        Ok(Self(template))
    }

    /// Fill in the placeholders in one left-to-right pass.
    ///
    /// Inserted names are never scanned again, so a name that looks like a
    /// placeholder stays as written.
    pub fn render(&self, assignor: &str, recipient: &str) -> String {
        let mut message = String::with_capacity(self.0.len() + assignor.len() + recipient.len());
        let mut rest = self.0.as_str();

        while let Some(start) = rest.find('{') {
            message.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix(ASSIGNOR_PLACEHOLDER) {
                message.push_str(assignor);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(RECIPIENT_PLACEHOLDER) {
                message.push_str(recipient);
                rest = after;
            } else {
                message.push('{');
                rest = &tail[1..];
            }
        }
        message.push_str(rest);
        message
    }
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self(DEFAULT_TEMPLATE.to_string())
    }
}

/// Apply a country prefix to a contact that does not carry one.
///
/// Contacts already starting with `+` are left alone.
pub fn with_country_prefix(contact: &str, prefix: Option<&str>) -> String {
    let contact = contact.trim();
    match prefix {
        Some(prefix) if !contact.starts_with('+') => format!("{prefix}{contact}"),
        _ => contact.to_string(),
    }
}

/// Prints `contact: message` lines.
#[derive(Debug)]
pub struct ConsoleNotifier<W> {
    out: W,
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn send(&mut self, contact: &str, message: &str) -> Result<()> {
        writeln!(self.out, "{contact}: {message}")?;
        Ok(())
    }
}

/// One notification as written by [`JsonLinesNotifier`].
#[derive(Debug, Serialize)]
struct Notification<'a> {
    contact: &'a str,
    message: &'a str,
}

/// Writes one JSON object per notification, for piping into a delivery
/// service.
#[derive(Debug)]
pub struct JsonLinesNotifier<W> {
    out: W,
}

impl<W: Write> JsonLinesNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for JsonLinesNotifier<W> {
    fn send(&mut self, contact: &str, message: &str) -> Result<()> {
        serde_json::to_writer(&mut self.out, &Notification { contact, message })?;
        writeln!(self.out)?;
        Ok(())
    }
}

/// Sends nothing; counts notifications so a draw can be rehearsed without
/// revealing anyone's recipient.
#[derive(Debug, Default)]
pub struct DryRunNotifier {
    skipped: usize,
}

impl DryRunNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications that would have been sent.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Notifier for DryRunNotifier {
    fn send(&mut self, contact: &str, _message: &str) -> Result<()> {
        debug!(contact, "dry run, notification skipped");
        self.skipped += 1;
        Ok(())
    }
}
