//! Abilities: leveled definitions and their per-unit readiness.
//!
//! ```text
//! NotReady --update (trigger met)--> Ready --usage--> Used
//!    ^                                                  |
//!    +------------- update (not disposable) ------------+
//! ```
mod ability;
mod definition;
mod error;

pub use ability::{Ability, AbilityState};
pub use definition::{AbilityDefinition, AbilityFlags, Trigger};
pub use error::AbilityError;

#[cfg(test)]
mod tests;
