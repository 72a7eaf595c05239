//! Participants and the raw records they are built from.

use std::collections::BTreeSet;

/// A person taking part in the draw.
///
/// `contact` is opaque to the registry and the engine; only the result sink
/// interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    name: String,
    contact: String,
    exclusions: BTreeSet<String>,
}

impl Participant {
    /// Create a participant with the given declared exclusions.
    pub fn new<I, S>(name: impl Into<String>, contact: impl Into<String>, exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            contact: contact.into(),
            exclusions: exclusions.into_iter().map(Into::into).collect(),
        }
    }

    /// Unique name within a registry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact handle used by the result sink.
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Names this participant must not be assigned to.
    pub fn exclusions(&self) -> &BTreeSet<String> {
        &self.exclusions
    }

    /// Whether `name` is one of this participant's exclusions.
    pub fn excludes(&self, name: &str) -> bool {
        self.exclusions.contains(name)
    }

    /// Whether this participant may give a gift to `name`.
    ///
    /// Nobody may give to themself.
    pub fn may_give_to(&self, name: &str) -> bool {
        name != self.name && !self.excludes(name)
    }

    /// Add an exclusion. Returns false if it was already present.
    pub(crate) fn exclude(&mut self, name: impl Into<String>) -> bool {
        self.exclusions.insert(name.into())
    }
}

/// Input shape of a participant before registration.
///
/// This is what input suppliers produce; exclusions are a plain list and may
/// contain duplicates, which collapse on registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantRecord {
    pub name: String,
    pub contact: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exclusions: Vec<String>,
}

impl ParticipantRecord {
    /// Create a record without exclusions.
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            exclusions: Vec::new(),
        }
    }

    /// Add exclusions to the record.
    pub fn excluding<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusions.extend(names.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nobody_gives_to_themself() {
        let ana = Participant::new("Ana", "1", Vec::<String>::new());
        assert!(!ana.may_give_to("Ana"));
        assert!(ana.may_give_to("Luis"));
    }

    #[test]
    fn exclusions_block_recipients() {
        let ana = Participant::new("Ana", "1", ["Luis"]);
        assert!(ana.excludes("Luis"));
        assert!(!ana.may_give_to("Luis"));
        assert!(ana.may_give_to("Marta"));
    }

    #[test]
    fn duplicate_exclusions_collapse() {
        let ana = Participant::new("Ana", "1", ["Luis", "Luis", "Marta"]);
        assert_eq!(ana.exclusions().len(), 2);
    }

    #[test]
    fn exclude_is_idempotent() {
        let mut ana = Participant::new("Ana", "1", Vec::<String>::new());
        assert!(ana.exclude("Luis"));
        assert!(!ana.exclude("Luis"));
        assert_eq!(ana.exclusions().len(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn record_exclusions_default_to_empty() {
        let record: ParticipantRecord =
            serde_json::from_str(r#"{"name": "Ana", "contact": "600111222"}"#).unwrap();
        assert_eq!(record, ParticipantRecord::new("Ana", "600111222"));
    }
}
