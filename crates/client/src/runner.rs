//! Headless duel runner: sets up the battle and drives it turn by turn.
use anyhow::{Context, Result, bail};
use duel_core::{BattleEngine, BattleError, BattleState, CharacterId, TurnOutcome};

use crate::config::DuelConfig;

/// Summary of a finished (or capped) duel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuelReport {
    pub winner: Option<CharacterId>,
    pub turns: u64,
    pub finished: bool,
    pub state: BattleState,
}

impl DuelReport {
    pub fn winner_name(&self) -> Option<&str> {
        self.winner
            .and_then(|id| self.state.character(id))
            .map(|c| c.name())
    }
}

/// Logs a core error with its classification and lifts it into `anyhow`.
fn classify<E>(err: E) -> anyhow::Error
where
    E: BattleError + std::error::Error + Send + Sync + 'static,
{
    let code = err.error_code();
    let severity = err.severity();
    tracing::error!(
        code,
        severity = severity.as_str(),
        character = ?err.character(),
        bug = severity.is_internal(),
        "{err}"
    );
    anyhow::Error::new(err).context(format!("{code} ({})", severity.as_str()))
}

/// Runs one duel to completion or until `max_turns` resolve.
pub fn run_duel(config: &DuelConfig) -> Result<DuelReport> {
    let mut state = BattleState::duel(&config.battle, config.first.clone(), config.second.clone())
        .map_err(classify)
        .context("failed to set up duel")?;

    for character in state.roster.iter() {
        tracing::info!(id = %character.id(), playstyle = %character.playstyle(), "{character}");
    }

    let mut engine = BattleEngine::new(&mut state);
    let mut finished = false;
    for _ in 0..config.max_turns {
        match engine.play_turn(None).map_err(classify)? {
            TurnOutcome::Resolved(outcome) => {
                let state = engine.state();
                if let (Some(actor), Some(target)) =
                    (state.character(outcome.actor), state.character(outcome.target))
                {
                    tracing::info!(
                        damage = outcome.damage,
                        cost = outcome.cost,
                        "{} uses {} on {} -> {}",
                        actor.name(),
                        outcome.kind,
                        target.name(),
                        target
                    );
                }
            }
            TurnOutcome::Rejected { actor, choice } => {
                bail!("character {actor} needs input (choice: {choice}); only self-driven duels run headless");
            }
            TurnOutcome::Finished { .. } => {
                finished = true;
                break;
            }
        }
    }

    if !finished {
        finished = engine.state().is_over();
        if !finished {
            tracing::warn!(max_turns = config.max_turns, "turn cap reached before the duel ended");
        }
    }

    let state = engine.state().clone();
    Ok(DuelReport {
        winner: state.winner(),
        turns: state.nonce,
        finished,
        state,
    })
}
