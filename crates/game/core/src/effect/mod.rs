//! Timed effects and their lifecycle.
//!
//! ```text
//! Pending --attach--> Active --advance_round × duration--> Expired (removed)
//! ```
//!
//! `on_apply` and `on_disable` are exact inverses, so an effect that comes and
//! goes leaves the holder's stats where they were.
mod collection;
mod effect;
mod error;
mod lifecycle;

pub use collection::EffectCollection;
pub use effect::{Effect, EffectState, StackingPolicy};
pub use error::EffectError;
pub use lifecycle::{advance_round, attach};

#[cfg(test)]
mod tests;
