//! Participant registry.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::participant::{Participant, ParticipantRecord};

/// Registered participants in insertion order.
///
/// Insertion order is stable, so a seeded draw over the same registry is
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    participants: Vec<Participant>,
    /// Name → position in `participants`.
    index: HashMap<String, usize>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            participants: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register every record, then validate the complete registry.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = ParticipantRecord>,
    {
        let mut registry = Self::new();
        for record in records {
            registry.register(record.name, record.contact, record.exclusions)?;
        }
        registry.validate()?;
        Ok(registry)
    }

    /// Register a participant.
    ///
    /// Fails with [`Error::DuplicateName`] if the name is already taken.
    pub fn register<I, S>(
        &mut self,
        name: impl Into<String>,
        contact: impl Into<String>,
        exclusions: I,
    ) -> Result<&Participant>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(Error::DuplicateName(name));
        }

        let position = self.participants.len();
        self.participants.push(Participant::new(name.clone(), contact, exclusions));
        self.index.insert(name, position);
        Ok(&self.participants[position])
    }

    /// All participants in insertion order.
    pub fn list(&self) -> &[Participant] {
        &self.participants
    }

    /// Add `excluded` to the exclusions of `participant`. Idempotent.
    pub fn add_exclusion(&mut self, participant: &str, excluded: impl Into<String>) -> Result<()> {
        let position = self
            .index_of(participant)
            .ok_or_else(|| Error::UnknownParticipant(participant.to_string()))?;
        self.participants[position].exclude(excluded);
        Ok(())
    }

    /// Check that every exclusion names a registered participant.
    pub fn validate(&self) -> Result<()> {
        for participant in &self.participants {
            if let Some(excluded) = participant
                .exclusions()
                .iter()
                .find(|name| !self.contains(name))
            {
                return Err(Error::UnknownExclusion {
                    participant: participant.name().to_string(),
                    excluded: excluded.clone(),
                });
            }
        }
        Ok(())
    }

    /// Look up a participant by name.
    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.index_of(name).map(|i| &self.participants[i])
    }

    /// Position of a participant in insertion order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Whether a participant with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
