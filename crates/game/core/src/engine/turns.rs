use crate::action::ActionChoice;
use crate::state::CharacterId;

use super::{ActionOutcome, BattleEngine, ExecuteError};

/// Result of asking the engine to play one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnOutcome {
    /// The next actor acted.
    Resolved(ActionOutcome),
    /// The actor's playstyle produced an invalid or unaffordable choice.
    /// Nothing changed; the same actor is still up.
    Rejected {
        actor: CharacterId,
        choice: ActionChoice,
    },
    /// The battle is over; no turn was played.
    Finished { winner: Option<CharacterId> },
}

/// Turn driving for BattleEngine.
impl<'a> BattleEngine<'a> {
    /// Plays one turn: peek the next actionable character, ask its playstyle,
    /// then dequeue and resolve the choice.
    ///
    /// `input` is forwarded to the playstyle (manual playstyles read it,
    /// random ones ignore it). On error the queue is left untouched.
    pub fn play_turn(&mut self, input: Option<&str>) -> Result<TurnOutcome, ExecuteError> {
        let next = if self.state.is_over() {
            None
        } else {
            self.state.peek()
        };
        let Some(actor) = next else {
            let winner = self.state.winner();
            tracing::info!(winner = ?winner, nonce = self.state.nonce, "battle over");
            return Ok(TurnOutcome::Finished { winner });
        };

        let (choice, legal) = {
            let state = &*self.state;
            let character = state
                .character(actor)
                .ok_or(ExecuteError::UnknownCharacter(actor))?;
            let choice = character.playstyle().select_action(state, input);
            let legal = choice.action().filter(|&kind| character.is_action_legal(kind));
            (choice, legal)
        };

        let Some(kind) = legal else {
            tracing::debug!(%actor, %choice, "turn rejected");
            return Ok(TurnOutcome::Rejected { actor, choice });
        };

        self.resolve_opponent(actor)?;

        let dequeued = self.state.queue.dequeue(&self.state.roster);
        debug_assert_eq!(dequeued, Some(actor), "peek and dequeue disagree");

        self.perform(actor, kind).map(TurnOutcome::Resolved)
    }

    /// Plays turns until the battle ends or `max_turns` resolve.
    ///
    /// Meant for self-driven battles: a rejected turn stops the run, since a
    /// manual playstyle without input can never make progress here.
    /// Returns the last outcome, or `None` when `max_turns` is 0.
    pub fn run(&mut self, max_turns: usize) -> Result<Option<TurnOutcome>, ExecuteError> {
        let mut last = None;
        for _ in 0..max_turns {
            let outcome = self.play_turn(None)?;
            let resolved = matches!(outcome, TurnOutcome::Resolved(_));
            last = Some(outcome);
            if !resolved {
                break;
            }
        }
        Ok(last)
    }
}
