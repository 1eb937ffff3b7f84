use crate::error::{ErrorSeverity, GameError};
use crate::factory::FactoryError;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AbilityError {
    /// The catalog has no such ability level.
    #[error("ability '{name}' level {level} not found")]
    NotFound { name: String, level: u8 },

    /// The ability's template is malformed.
    #[error("ability '{name}' has a malformed template: {source}")]
    Construction { name: String, source: FactoryError },

    /// `usage` called while not ready.
    #[error("ability '{name}' is not ready")]
    NotReady { name: String },

    #[error("no ability at index {index}")]
    IndexOutOfRange { index: usize },
}

impl GameError for AbilityError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } => ErrorSeverity::Validation,
            Self::Construction { .. } => ErrorSeverity::Fatal,
            Self::NotReady { .. } => ErrorSeverity::Recoverable,
            Self::IndexOutOfRange { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "ABILITY_NOT_FOUND",
            Self::Construction { .. } => "ABILITY_CONSTRUCTION",
            Self::NotReady { .. } => "ABILITY_NOT_READY",
            Self::IndexOutOfRange { .. } => "ABILITY_INDEX_OUT_OF_RANGE",
        }
    }
}
