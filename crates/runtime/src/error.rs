//! Unified error type surfaced by the runtime.
//!
//! Wraps failures from the core rules and from content loading so the client
//! can bubble them up with consistent context.
use thiserror::Error;

use skirmish_core::{AbilityError, ActionError, StateError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("battle requires {0} before building")]
    MissingContent(&'static str),

    #[error("roster '{name}' not found (available: {available})")]
    UnknownRoster { name: String, available: String },

    #[error("battle already finished after {rounds} rounds")]
    BattleFinished { rounds: u32 },

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Ability(#[from] AbilityError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Content(#[from] anyhow::Error),
}
