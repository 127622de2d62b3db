//! Common error infrastructure for duel-core.
//!
//! Domain-specific errors (`ExecuteError`, `SetupError`) live next to the code
//! that raises them. This module only provides the shared classification.
//!
//! Routine game outcomes are never errors here: an empty queue, an invalid
//! action label or a battle without a winner are modelled with `Option` and
//! explicit result enums. Errors are reserved for broken setup or corrupted
//! state.

use crate::state::CharacterId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistency, indicates a bug
/// - **Fatal**: battle cannot continue (e.g. a character was never given an opponent)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a bug or broken setup.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all duel-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Character involved in the failure, if any.
    fn character(&self) -> Option<CharacterId> {
        None
    }

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and test assertions.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_and_fatal_flag_bugs() {
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
