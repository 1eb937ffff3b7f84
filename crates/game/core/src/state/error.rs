//! State management errors.

use crate::ability::AbilityError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CommandId, UnitId};

/// Errors that occur while assembling or querying the battlefield.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StateError {
    /// No unit with this id exists.
    #[error("unit {0} not found")]
    UnitNotFound(UnitId),

    /// A unit was pushed into a slot other than the one its id names.
    #[error("expected unit id {expected}, got {got}")]
    UnexpectedUnitId { expected: UnitId, got: UnitId },

    /// Command already holds the maximum number of units.
    #[error("command {command} is full (max: {max})")]
    CommandFull { command: CommandId, max: usize },

    /// Unit was given more abilities than it can carry.
    #[error("unit {name} has too many abilities (max: {max})")]
    TooManyAbilities { name: String, max: usize },

    /// Life values must be positive.
    #[error("unit {name} has invalid life {life}")]
    InvalidLife { name: String, life: i32 },

    /// A battle needs at least two commands with distinct ids.
    #[error("battlefield needs two distinct commands, got {count}")]
    InvalidCommandCount { count: usize },

    /// A unit's ability could not be resolved or built.
    #[error(transparent)]
    Ability(#[from] AbilityError),
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnitNotFound(_) => ErrorSeverity::Validation,
            Self::UnexpectedUnitId { .. }
            | Self::CommandFull { .. }
            | Self::TooManyAbilities { .. }
            | Self::InvalidLife { .. }
            | Self::InvalidCommandCount { .. } => ErrorSeverity::Fatal,
            Self::Ability(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnitNotFound(_) => "STATE_UNIT_NOT_FOUND",
            Self::UnexpectedUnitId { .. } => "STATE_UNEXPECTED_UNIT_ID",
            Self::CommandFull { .. } => "STATE_COMMAND_FULL",
            Self::TooManyAbilities { .. } => "STATE_TOO_MANY_ABILITIES",
            Self::InvalidLife { .. } => "STATE_INVALID_LIFE",
            Self::InvalidCommandCount { .. } => "STATE_INVALID_COMMAND_COUNT",
            Self::Ability(err) => err.error_code(),
        }
    }
}
