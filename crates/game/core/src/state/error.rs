//! Battle setup errors.

use super::common::CharacterId;
use crate::error::{BattleError, ErrorSeverity};

/// Errors raised while wiring characters together before a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetupError {
    #[error("character {0} cannot be its own opponent")]
    SelfOpponent(CharacterId),

    #[error("character {0} is not in the roster")]
    UnknownCharacter(CharacterId),
}

impl BattleError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn character(&self) -> Option<CharacterId> {
        match self {
            Self::SelfOpponent(id) | Self::UnknownCharacter(id) => Some(*id),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SelfOpponent(_) => "SETUP_SELF_OPPONENT",
            Self::UnknownCharacter(_) => "SETUP_UNKNOWN_CHARACTER",
        }
    }
}
