//! Common error infrastructure for skirmish-core.
//!
//! This module provides shared types and traits used across all error types in the
//! crate. Domain-specific errors (`FactoryError`, `ActionError`, `EffectError`, ...)
//! are defined in their respective modules alongside the operations they guard.
//!
//! # Error Taxonomy
//!
//! - **Construction errors**: malformed declarative templates. Fatal for the ability
//!   or unit being built; a battle must not start with such a unit.
//! - **Precondition failures**: not errors at all. `can_be_used` / `peek_feasible`
//!   answer with a boolean and never fail.
//! - **Execution-order violations**: handling an action twice, handling an action
//!   whose preconditions do not hold, ticking an expired effect. These indicate bugs
//!   in the caller and are classified as internal.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Expected runtime conditions the caller may work around
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Caller broke an ordering contract (double handle, underflow)
/// - **Fatal**: The battle cannot be started or continued
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller can choose another action.
    ///
    /// Examples: ability not ready, effect collection full
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown unit id, unknown ability level
    Validation,

    /// Internal error - an ordering contract was violated.
    ///
    /// Examples: action handled twice, effect duration decremented below zero
    Internal,

    /// Fatal error - construction failed, the battle must not start.
    ///
    /// Examples: unknown action type in a template, unbalanced effect
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or a corrupted setup.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all skirmish-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
