//! Shared fixtures for end-to-end draw tests.

use santa_cli::{Notifier, Result};

/// Keeps every notification in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub sent: Vec<(String, String)>,
}

impl Notifier for RecordingNotifier {
    fn send(&mut self, contact: &str, message: &str) -> Result<()> {
        self.sent.push((contact.to_string(), message.to_string()));
        Ok(())
    }
}

/// A family draw: couples may not draw each other.
pub const FAMILY: &str = "\
# name;phone;exclusions
Ana;600000001;Luis
Luis;600000002;Ana
Marta;600000003;Jorge
Jorge;600000004;Marta
Elena;600000005;Pablo
Pablo;600000006;Elena
Sofia;600000007
";
