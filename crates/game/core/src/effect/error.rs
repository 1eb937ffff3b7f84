//! Effect lifecycle errors.

use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EffectError {
    /// `tick` called on an effect whose remaining duration is already zero.
    #[error("effect {name} ticked past expiry")]
    DurationUnderflow { name: String },

    /// Holder cannot carry more effects.
    #[error("effect collection is full (max: {max})")]
    CollectionFull { max: usize },

    /// An effect with this name is already attached.
    #[error("effect {name} is already active")]
    AlreadyActive { name: String },
}

impl GameError for EffectError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DurationUnderflow { .. } => ErrorSeverity::Internal,
            Self::CollectionFull { .. } | Self::AlreadyActive { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DurationUnderflow { .. } => "EFFECT_DURATION_UNDERFLOW",
            Self::CollectionFull { .. } => "EFFECT_COLLECTION_FULL",
            Self::AlreadyActive { .. } => "EFFECT_ALREADY_ACTIVE",
        }
    }
}
