//! Template construction errors.

use crate::action::{ActionTag, TargetPolicy};
use crate::error::{ErrorSeverity, GameError};

/// A malformed declarative template. Aborts construction of the owning ability.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FactoryError {
    #[error("unknown action type '{0}'")]
    UnknownActionType(String),

    #[error("unknown target policy '{0}'")]
    UnknownTargetPolicy(String),

    #[error("target policy {target} is not allowed for {kind} actions")]
    TargetNotAllowed { kind: ActionTag, target: TargetPolicy },

    #[error("unknown modifier method '{0}'")]
    UnknownModifier(String),

    #[error("unknown damage school '{0}'")]
    UnknownSchool(String),

    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    #[error("{kind} is missing required field '{field}'")]
    MissingField { kind: String, field: &'static str },

    #[error("{kind} has invalid power {power}")]
    InvalidPower { kind: String, power: f64 },

    #[error("effect '{name}' has zero duration")]
    ZeroDuration { name: String },

    #[error("effect name must not be empty")]
    EmptyEffectName,

    #[error("effect '{name}' is not undone by its disable actions")]
    UnbalancedEffect { name: String },

    #[error("effect '{name}' applies another effect")]
    NestedEffect { name: String },
}

impl GameError for FactoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use FactoryError::*;
        match self {
            UnknownActionType(_) => "FACTORY_UNKNOWN_ACTION_TYPE",
            UnknownTargetPolicy(_) => "FACTORY_UNKNOWN_TARGET_POLICY",
            TargetNotAllowed { .. } => "FACTORY_TARGET_NOT_ALLOWED",
            UnknownModifier(_) => "FACTORY_UNKNOWN_MODIFIER",
            UnknownSchool(_) => "FACTORY_UNKNOWN_SCHOOL",
            UnknownResource(_) => "FACTORY_UNKNOWN_RESOURCE",
            MissingField { .. } => "FACTORY_MISSING_FIELD",
            InvalidPower { .. } => "FACTORY_INVALID_POWER",
            ZeroDuration { .. } => "FACTORY_ZERO_DURATION",
            EmptyEffectName => "FACTORY_EMPTY_EFFECT_NAME",
            UnbalancedEffect { .. } => "FACTORY_UNBALANCED_EFFECT",
            NestedEffect { .. } => "FACTORY_NESTED_EFFECT",
        }
    }
}
