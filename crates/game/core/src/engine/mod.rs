//! Action resolution.
//!
//! The [`BattleEngine`] is the only mutator of [`BattleState`]. Resolving an
//! action runs four steps in a fixed order:
//!
//! 1. restart the actor's animation track
//! 2. apply the damage formula to the opponent
//! 3. deduct the action cost from the actor
//! 4. append the archetype's re-queue entries to the turn queue
//!
//! Turn-level driving (peek, decide, dequeue, resolve) lives in [`turns`].

mod errors;
mod turns;

pub use errors::ExecuteError;
pub use turns::TurnOutcome;

use arrayvec::ArrayVec;

use crate::action::ActionKind;
use crate::config::BattleConfig;
use crate::state::{BattleState, CharacterId};

/// Complete outcome of one resolved action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub actor: CharacterId,
    pub target: CharacterId,
    pub kind: ActionKind,
    /// Health the target actually lost.
    pub damage: u32,
    /// Resource points the actor actually spent.
    pub cost: u32,
    /// Entries appended to the queue, in order.
    pub requeued: ArrayVec<CharacterId, { BattleConfig::MAX_REQUEUE }>,
    /// Target health after the action.
    pub target_health: u32,
}

impl ActionOutcome {
    pub fn knocked_out(&self) -> bool {
        self.target_health == 0
    }
}

/// Engine that resolves actions against a borrowed battle state.
pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
}

impl<'a> BattleEngine<'a> {
    pub fn new(state: &'a mut BattleState) -> Self {
        Self { state }
    }

    /// Read-only view of the underlying state.
    pub fn state(&self) -> &BattleState {
        self.state
    }

    /// Looks up the opponent `actor` would strike, without touching state.
    fn resolve_opponent(&self, actor: CharacterId) -> Result<CharacterId, ExecuteError> {
        let opponent = self
            .state
            .roster
            .get(actor)
            .ok_or(ExecuteError::UnknownCharacter(actor))?
            .opponent()
            .ok_or(ExecuteError::MissingOpponent { actor })?;

        if opponent == actor || !self.state.roster.contains(opponent) {
            return Err(ExecuteError::InvalidOpponent { actor, opponent });
        }
        Ok(opponent)
    }

    /// Resolves `kind` for `actor` against its opponent.
    ///
    /// Does not check affordability or queue position; costs saturate at 0.
    /// Use [`play_turn`](Self::play_turn) for the validated turn flow.
    pub fn perform(
        &mut self,
        actor: CharacterId,
        kind: ActionKind,
    ) -> Result<ActionOutcome, ExecuteError> {
        let opponent = self.resolve_opponent(actor)?;

        let (attacker, defender) = self
            .state
            .roster
            .pair_mut(actor, opponent)
            .ok_or(ExecuteError::InvalidOpponent { actor, opponent })?;

        let profile = attacker.archetype().profile().action(kind);

        attacker.animation.restart(kind.into());

        let before = defender.health.current();
        let after = profile.resolve_health(before, defender.defense(), defender.health.maximum());
        defender.health.set(after);
        let target_health = defender.health.current();

        let cost = attacker.resource.deplete(profile.cost);

        let requeued = profile.requeue.entries(actor, opponent);
        for &id in &requeued {
            self.state.queue.enqueue(id);
        }

        self.state.nonce += 1;

        let outcome = ActionOutcome {
            actor,
            target: opponent,
            kind,
            damage: before.saturating_sub(target_health),
            cost,
            requeued,
            target_health,
        };

        tracing::debug!(
            %actor,
            target = %opponent,
            action = %kind,
            damage = outcome.damage,
            cost = outcome.cost,
            target_health,
            requeued = ?outcome.requeued.as_slice(),
            nonce = self.state.nonce,
            "action resolved"
        );

        Ok(outcome)
    }

    pub fn perform_attack(&mut self, actor: CharacterId) -> Result<ActionOutcome, ExecuteError> {
        self.perform(actor, ActionKind::Attack)
    }

    pub fn perform_special(&mut self, actor: CharacterId) -> Result<ActionOutcome, ExecuteError> {
        self.perform(actor, ActionKind::Special)
    }
}
