//! Stat pipeline errors.

use crate::error::{ErrorSeverity, GameError};

use super::modifier::Modifier;

/// Errors raised by [`super::StatPipeline`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StatError {
    /// Revert requested for a modifier that is not on the stack.
    #[error("modifier {modifier:?} is not active")]
    ModifierNotActive { modifier: Modifier },
}

impl GameError for StatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ModifierNotActive { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ModifierNotActive { .. } => "STAT_MODIFIER_NOT_ACTIVE",
        }
    }
}
