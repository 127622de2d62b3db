//! Playstyles decide which action the next character takes.
//!
//! A playstyle is bound to a character at spawn and never swapped. Selection
//! is a pure function of the battle state and the optional input label; it
//! never mutates characters or the queue.

use crate::action::{ActionChoice, ActionKind};
use crate::rng::{PcgRng, RngOracle, compute_seed};
use crate::state::BattleState;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Playstyle {
    /// Passes an externally supplied label through.
    #[default]
    Manual,
    /// Picks uniformly among the legal actions of the next actionable character.
    Random,
}

impl Playstyle {
    pub const fn is_manual(self) -> bool {
        matches!(self, Self::Manual)
    }

    /// Chooses an action label.
    ///
    /// Manual: `input` must be exactly `"attack"`, `"A"`, `"special"` or
    /// `"S"`; anything else is
    /// [`ActionChoice::Invalid`]. Random: `input` is ignored and the choice is
    /// drawn for the queue's first actionable character.
    pub fn select_action(self, state: &BattleState, input: Option<&str>) -> ActionChoice {
        match self {
            Self::Manual => select_manual(input),
            Self::Random => select_random(state),
        }
    }
}

fn select_manual(input: Option<&str>) -> ActionChoice {
    input
        .and_then(|label| label.parse::<ActionKind>().ok())
        .into()
}

fn select_random(state: &BattleState) -> ActionChoice {
    let Some(character) = state.first_actionable().and_then(|id| state.character(id)) else {
        return ActionChoice::Invalid;
    };

    let options = character.available_actions();
    if options.is_empty() {
        return ActionChoice::Invalid;
    }

    let seed = compute_seed(state.seed, state.nonce, character.id().0);
    let index = PcgRng.pick_index(seed, options.len());
    options
        .get(index)
        .copied()
        .map_or(ActionChoice::Invalid, ActionChoice::from)
}
