//! Action execution errors.

use crate::effect::EffectError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::UnitId;
use crate::stats::StatError;

use super::ActionTag;

/// Errors raised while handling an action.
///
/// A failed precondition is not an error: callers check
/// [`super::Action::can_be_used`] first. Everything here is a broken
/// execution-order contract or a missing unit.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ActionError {
    /// `handle` called on an action that already ran.
    #[error("{tag} action already handled")]
    AlreadyHandled { tag: ActionTag },

    /// `handle` called while `can_be_used` is false.
    #[error("{tag} action is not applicable")]
    NotApplicable { tag: ActionTag },

    /// Scope references a unit that does not exist.
    #[error("unit {0} not found")]
    UnitNotFound(UnitId),

    #[error(transparent)]
    Stat(#[from] StatError),

    #[error(transparent)]
    Effect(#[from] EffectError),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            AlreadyHandled { .. } | NotApplicable { .. } => ErrorSeverity::Internal,
            UnitNotFound(_) => ErrorSeverity::Validation,
            Stat(err) => err.severity(),
            Effect(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            AlreadyHandled { .. } => "ACTION_ALREADY_HANDLED",
            NotApplicable { .. } => "ACTION_NOT_APPLICABLE",
            UnitNotFound(_) => "ACTION_UNIT_NOT_FOUND",
            Stat(err) => err.error_code(),
            Effect(err) => err.error_code(),
        }
    }
}
