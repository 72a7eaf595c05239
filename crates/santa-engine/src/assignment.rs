//! The finished draw and its invariants.

use std::collections::HashSet;

use santa_registry::{Participant, Registry};

use crate::error::Violation;

/// One assignor and the participant they give a gift to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub assignor: Participant,
    pub recipient: Participant,
}

/// A complete draw: every participant gives exactly once and receives
/// exactly once.
///
/// Pairings are ordered by the assignor's registry position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pairings: Vec<Pairing>,
    attempts: usize,
}

impl Assignment {
    /// Build from `recipients[assignor] = recipient` registry positions.
    pub(crate) fn from_positions(
        registry: &Registry,
        recipients: &[usize],
        attempts: usize,
    ) -> Self {
        let participants = registry.list();
        let pairings = recipients
            .iter()
            .enumerate()
            .map(|(assignor, &recipient)| Pairing {
                assignor: participants[assignor].clone(),
                recipient: participants[recipient].clone(),
            })
            .collect();
        Self { pairings, attempts }
    }

    /// All pairings in assignor order.
    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    /// Iterate over `(assignor, recipient)`.
    pub fn iter(&self) -> impl Iterator<Item = (&Participant, &Participant)> {
        self.pairings.iter().map(|p| (&p.assignor, &p.recipient))
    }

    /// Recipient for the named assignor.
    pub fn recipient_of(&self, assignor: &str) -> Option<&Participant> {
        self.pairings
            .iter()
            .find(|p| p.assignor.name() == assignor)
            .map(|p| &p.recipient)
    }

    /// Number of pairings.
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// Attempts the engine needed to find this assignment.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Check every invariant against the registry's declared exclusions.
    pub fn verify(&self, registry: &Registry) -> Result<(), Violation> {
        verify(registry, self.iter().map(|(a, r)| (a.name(), r.name())))
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a Pairing;
    type IntoIter = std::slice::Iter<'a, Pairing>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairings.iter()
    }
}

/// Verify `(assignor, recipient)` name pairs against a registry.
///
/// Checks size, bijectivity, irreflexivity and declared exclusions. Looks
/// participants up by name so it does not share any state with the draw
/// that produced the pairs.
pub fn verify<'a, I>(registry: &Registry, pairs: I) -> Result<(), Violation>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut assignors = HashSet::new();
    let mut recipients = HashSet::new();

    for (assignor_name, recipient_name) in pairs {
        let assignor = registry
            .get(assignor_name)
            .ok_or_else(|| Violation::UnknownParticipant(assignor_name.to_string()))?;
        if !registry.contains(recipient_name) {
            return Err(Violation::UnknownParticipant(recipient_name.to_string()));
        }
        if !assignors.insert(assignor_name) {
            return Err(Violation::DuplicateAssignor(assignor_name.to_string()));
        }
        if !recipients.insert(recipient_name) {
            return Err(Violation::DuplicateRecipient(recipient_name.to_string()));
        }
        if assignor_name == recipient_name {
            return Err(Violation::SelfAssignment(assignor_name.to_string()));
        }
        if assignor.excludes(recipient_name) {
            return Err(Violation::ExcludedRecipient {
                assignor: assignor_name.to_string(),
                recipient: recipient_name.to_string(),
            });
        }
    }

    // Distinct known assignors; equal count means everyone is covered
    if assignors.len() != registry.len() {
        return Err(Violation::WrongSize {
            expected: registry.len(),
            actual: assignors.len(),
        });
    }
    Ok(())
}
