//! Authoritative battle state.
//!
//! Characters live in a [`Roster`] arena and refer to each other (and appear
//! in the [`TurnQueue`]) by [`CharacterId`]. Callers read this state freely but
//! mutate it through [`BattleEngine`](crate::engine::BattleEngine).
mod character;
mod common;
mod error;
mod queue;
mod roster;

pub use character::{AnimationFrame, AnimationKind, AnimationState, Character};
pub use common::{CharacterId, ResourceMeter};
pub use error::SetupError;
pub use queue::TurnQueue;
pub use roster::Roster;

use crate::action::Archetype;
use crate::config::BattleConfig;
use crate::strategy::Playstyle;

/// Everything needed to spawn one character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterSpec {
    pub name: String,
    pub archetype: Archetype,
    pub playstyle: Playstyle,
}

impl CharacterSpec {
    pub fn new(name: impl Into<String>, archetype: Archetype, playstyle: Playstyle) -> Self {
        Self {
            name: name.into(),
            archetype,
            playstyle,
        }
    }
}

/// Canonical snapshot of a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    /// RNG seed set once at creation. Combined with `nonce` per decision.
    pub seed: u64,
    /// Number of actions resolved so far.
    pub nonce: u64,
    pub roster: Roster,
    pub queue: TurnQueue,
}

impl BattleState {
    /// Creates an empty battle: no characters, empty queue.
    pub fn new(config: &BattleConfig) -> Self {
        Self {
            seed: config.seed,
            nonce: 0,
            roster: Roster::new(),
            queue: TurnQueue::new(),
        }
    }

    /// Standard two-character setup.
    ///
    /// Spawns `first` (id 0) and `second` (id 1), links them as opponents and
    /// enqueues `first` then `second`.
    pub fn duel(
        config: &BattleConfig,
        first: CharacterSpec,
        second: CharacterSpec,
    ) -> Result<Self, SetupError> {
        let mut state = Self::new(config);
        let a = state.spawn(first);
        let b = state.spawn(second);
        state.roster.link_opponents(a, b)?;
        state.queue.enqueue(a);
        state.queue.enqueue(b);
        Ok(state)
    }

    /// Adds a character to the roster without queueing it.
    pub fn spawn(&mut self, spec: CharacterSpec) -> CharacterId {
        self.roster.spawn(spec.name, spec.archetype, spec.playstyle)
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.roster.get(id)
    }

    pub fn first_actionable(&self) -> Option<CharacterId> {
        self.queue.first_actionable(&self.roster)
    }

    pub fn peek(&self) -> Option<CharacterId> {
        self.queue.peek(&self.roster)
    }

    /// True when nobody in the queue can act.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty(&self.roster)
    }

    pub fn is_over(&self) -> bool {
        self.queue.is_over(&self.roster)
    }

    pub fn winner(&self) -> Option<CharacterId> {
        self.queue.winner(&self.roster)
    }
}
