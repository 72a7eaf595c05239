//! Santa Participant Registry
//!
//! Holds the people taking part in a draw: their unique name, an opaque
//! contact handle, and the set of names each of them must never be matched
//! with.
//!
//! # Names Are Keys
//!
//! A participant's name is the matching key for exclusions, so names are
//! unique within a registry. Registration of a second participant with the
//! same name is rejected immediately.
//!
//! # Forward References
//!
//! Exclusions may name participants that are registered later. Whether every
//! exclusion resolves is checked once the registry is complete, through
//! [`Registry::validate`], and always before an assignment is attempted.

mod error;
mod participant;
mod registry;

pub use error::{Error, Result};
pub use participant::{Participant, ParticipantRecord};
pub use registry::Registry;
