//! Traits describing read-only data the engine consumes.
//!
//! Oracles expose the leveled ability catalog and deterministic randomness. The
//! engine never loads files itself; `skirmish-content` implements the providers.
mod provider;
mod rng;

pub use provider::{AbilityProvider, StaticAbilityProvider};
pub use rng::{Dice, PcgRng, RngOracle, compute_seed};
