//! Deterministic combat rules shared by the runtime and tools.
//!
//! `skirmish-core` implements the Ability–Action–Effect engine: a stat pipeline
//! with reversible modifiers, executable actions built from declarative
//! templates, timed effects, and per-unit ability readiness. It performs no I/O
//! and does not log; randomness comes in through [`env::Dice`].
pub mod ability;
pub mod action;
pub mod combat;
pub mod config;
pub mod effect;
pub mod env;
pub mod error;
pub mod factory;
pub mod state;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

pub use ability::{Ability, AbilityDefinition, AbilityError, AbilityFlags, AbilityState, Trigger};
pub use action::{
    Action, ActionCollection, ActionError, ActionKind, ActionScope, ActionTag, ExecutionRecord,
    Hit, HitOutcome, MessageKind, Polarity, TargetPolicy,
};
pub use config::{CombatConfig, HitChanceParams, ResourceGain};
pub use effect::{Effect, EffectCollection, EffectError, EffectState, StackingPolicy};
pub use env::{AbilityProvider, Dice, PcgRng, RngOracle, StaticAbilityProvider};
pub use error::{ErrorSeverity, GameError};
pub use factory::{ActionFactory, ActionSpec, EffectSpec, FactoryError, ModifierSpec};
pub use state::{
    AbilityRef, Battlefield, Command, CommandId, StateError, Unit, UnitId, UnitTemplate,
    UnitVitals,
};
pub use stats::{
    DamageSchool, Defense, Modifier, Offense, ResourceKind, SchoolValues, StatError,
    StatPipeline,
};
