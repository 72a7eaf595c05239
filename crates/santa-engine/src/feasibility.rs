//! Structural feasibility checks.
//!
//! Some registries can never produce an assignment no matter how the draw
//! goes. These are detected up front so the retry budget is not burned on
//! them:
//!
//! - fewer than two participants (nobody to give to but yourself)
//! - a participant whose exclusions plus self cover the whole group
//! - a participant that every other participant excludes
//!
//! Passing these checks does not guarantee feasibility (Hall's condition can
//! fail on larger subsets), which is what the bounded retry budget is for.

use santa_registry::Registry;

use crate::error::Infeasibility;

/// Who may give to whom, by registry position.
#[derive(Debug, Clone)]
pub(crate) struct Constraints {
    /// `allowed[a][r]`: participant `a` may give to participant `r`.
    allowed: Vec<Vec<bool>>,
}

impl Constraints {
    /// Build from the registry's declared exclusions.
    pub(crate) fn from_registry(registry: &Registry) -> Self {
        let participants = registry.list();
        let allowed = participants
            .iter()
            .map(|assignor| {
                participants
                    .iter()
                    .map(|recipient| assignor.may_give_to(recipient.name()))
                    .collect()
            })
            .collect();
        Self { allowed }
    }

    pub(crate) fn len(&self) -> usize {
        self.allowed.len()
    }

    pub(crate) fn allows(&self, assignor: usize, recipient: usize) -> bool {
        self.allowed[assignor][recipient]
    }

    fn recipient_count(&self, assignor: usize) -> usize {
        self.allowed[assignor].iter().filter(|&&ok| ok).count()
    }

    fn assignor_count(&self, recipient: usize) -> usize {
        self.allowed.iter().filter(|row| row[recipient]).count()
    }

    /// First structural reason no assignment can exist, if any.
    pub(crate) fn structural_infeasibility(&self, registry: &Registry) -> Option<Infeasibility> {
        let count = self.len();
        if count < 2 {
            return Some(Infeasibility::TooFewParticipants { count });
        }

        let participants = registry.list();
        if let Some(stuck) = (0..count).find(|&a| self.recipient_count(a) == 0) {
            return Some(Infeasibility::NoPossibleRecipient {
                name: participants[stuck].name().to_string(),
            });
        }
        if let Some(shunned) = (0..count).find(|&r| self.assignor_count(r) == 0) {
            return Some(Infeasibility::NoPossibleAssignor {
                name: participants[shunned].name().to_string(),
            });
        }
        None
    }
}

/// Check a registry for structural infeasibility without drawing.
pub fn check_structure(registry: &Registry) -> Result<(), Infeasibility> {
    match Constraints::from_registry(registry).structural_infeasibility(registry) {
        Some(reason) => Err(reason),
        None => Ok(()),
    }
}
