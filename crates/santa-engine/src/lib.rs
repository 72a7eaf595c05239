//! Secret Santa Assignment Engine
//!
//! Draws, for every participant in a [`Registry`](santa_registry::Registry),
//! exactly one other participant to give a gift to.
//!
//! # Invariants
//!
//! Every assignment the engine returns is:
//! 1. complete: one pairing per participant
//! 2. bijective: every participant receives exactly once
//! 3. irreflexive: nobody gives to themself
//! 4. exclusion-respecting: no pairing matches a declared exclusion
//!
//! # Restart on Dead Ends
//!
//! Greedy random picking can paint itself into a corner: the last assignors
//! may have no legal recipient left. Each attempt shuffles the assignor
//! order and draws uniformly from the pool of recipients not yet chosen.
//! A dead end throws the attempt away and starts over. The number of
//! attempts is bounded, so a draw always terminates, either with a verified
//! assignment or with [`Error::InfeasibleAssignment`].
//!
//! Groups that can never succeed (one participant, somebody who excludes
//! everyone, somebody everyone excludes) are rejected before any attempt.
//!
//! # Example
//!
//! ```
//! use santa_engine::AssignmentEngine;
//! use santa_registry::{ParticipantRecord, Registry};
//!
//! let registry = Registry::from_records(vec![
//!     ParticipantRecord::new("Ana", "600111222").excluding(["Luis"]),
//!     ParticipantRecord::new("Luis", "600333444"),
//!     ParticipantRecord::new("Marta", "600555666"),
//! ])?;
//!
//! let assignment = AssignmentEngine::seeded(42).assign(&registry)?;
//! assert_eq!(assignment.len(), 3);
//! assert_ne!(assignment.recipient_of("Ana").unwrap().name(), "Luis");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod assignment;
mod config;
mod engine;
mod error;
mod feasibility;

pub use assignment::{verify, Assignment, Pairing};
pub use config::{EngineConfig, DEFAULT_MAX_ATTEMPTS};
pub use engine::AssignmentEngine;
pub use error::{Error, Infeasibility, Result, Violation};
pub use feasibility::check_structure;
