//! Error types for action resolution.

use crate::error::{BattleError, ErrorSeverity};
use crate::state::CharacterId;

/// Errors surfaced while resolving an action through the battle engine.
///
/// None of these are game outcomes; they all mean the battle was wired up
/// wrong or the state was corrupted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("character {actor} has no opponent assigned")]
    MissingOpponent { actor: CharacterId },

    #[error("character {actor} lists itself or an unknown character ({opponent}) as opponent")]
    InvalidOpponent {
        actor: CharacterId,
        opponent: CharacterId,
    },

    #[error("character {0} is not in the roster")]
    UnknownCharacter(CharacterId),
}

impl BattleError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingOpponent { .. } => ErrorSeverity::Fatal,
            Self::InvalidOpponent { .. } | Self::UnknownCharacter(_) => ErrorSeverity::Internal,
        }
    }

    fn character(&self) -> Option<CharacterId> {
        match self {
            Self::MissingOpponent { actor } | Self::InvalidOpponent { actor, .. } => Some(*actor),
            Self::UnknownCharacter(id) => Some(*id),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingOpponent { .. } => "EXECUTE_MISSING_OPPONENT",
            Self::InvalidOpponent { .. } => "EXECUTE_INVALID_OPPONENT",
            Self::UnknownCharacter(_) => "EXECUTE_UNKNOWN_CHARACTER",
        }
    }
}
