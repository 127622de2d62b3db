//! Action kinds, strategy choices and the per-character available set.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;

/// Combat actions a character can take on its turn.
///
/// Parses from the full label or the single-letter key (`"attack"`/`"A"`,
/// `"special"`/`"S"`). Matching is exact: no case folding, no trimming.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    #[strum(to_string = "attack", serialize = "A")]
    Attack,
    #[strum(to_string = "special", serialize = "S")]
    Special,
}

impl ActionKind {
    /// Single-letter key used by input collaborators.
    pub const fn key(self) -> char {
        match self {
            Self::Attack => 'A',
            Self::Special => 'S',
        }
    }
}

/// Label returned by a playstyle: an action or the invalid sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionChoice {
    Attack,
    Special,
    /// No valid action could be chosen.
    Invalid,
}

impl ActionChoice {
    /// The chosen action, or `None` for [`ActionChoice::Invalid`].
    pub const fn action(self) -> Option<ActionKind> {
        match self {
            Self::Attack => Some(ActionKind::Attack),
            Self::Special => Some(ActionKind::Special),
            Self::Invalid => None,
        }
    }

    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Single-letter key (`'X'` for invalid).
    pub const fn key(self) -> char {
        match self.action() {
            Some(kind) => kind.key(),
            None => 'X',
        }
    }
}

impl From<ActionKind> for ActionChoice {
    fn from(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Attack => Self::Attack,
            ActionKind::Special => Self::Special,
        }
    }
}

impl From<Option<ActionKind>> for ActionChoice {
    fn from(kind: Option<ActionKind>) -> Self {
        kind.map_or(Self::Invalid, Self::from)
    }
}

/// Actions currently affordable, cheapest first.
pub type AvailableActions = ArrayVec<ActionKind, { BattleConfig::MAX_ACTIONS }>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_keys() {
        assert_eq!("attack".parse::<ActionKind>(), Ok(ActionKind::Attack));
        assert_eq!("A".parse::<ActionKind>(), Ok(ActionKind::Attack));
        assert_eq!("special".parse::<ActionKind>(), Ok(ActionKind::Special));
        assert_eq!("S".parse::<ActionKind>(), Ok(ActionKind::Special));
        assert!("r".parse::<ActionKind>().is_err());
        assert!("".parse::<ActionKind>().is_err());
    }

    #[test]
    fn rejects_case_and_whitespace_variants() {
        for label in ["a", "s", "Attack", "SPECIAL", " attack", "S\n"] {
            assert!(label.parse::<ActionKind>().is_err(), "{label:?} parsed");
        }
    }

    #[test]
    fn choice_labels() {
        assert_eq!(ActionChoice::Attack.to_string(), "attack");
        assert_eq!(ActionChoice::Invalid.as_ref(), "invalid");
        assert_eq!(ActionChoice::Invalid.key(), 'X');
        assert_eq!(ActionChoice::from(ActionKind::Special).key(), 'S');
        assert_eq!(ActionChoice::from(None), ActionChoice::Invalid);
    }
}
