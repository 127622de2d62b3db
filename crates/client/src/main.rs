//! Duel client binary.
//!
//! Runs one self-driven duel and logs the result.
//!
//! ```bash
//! DUEL_SEED=7 RUST_LOG=duel_core=debug cargo run -p duel-client
//! ```

use anyhow::Result;
use duel_client::{DuelConfig, logging, run_duel};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = DuelConfig::from_env();
    logging::setup_logging()?;

    tracing::info!(seed = config.battle.seed, max_turns = config.max_turns, "starting duel");

    let report = run_duel(&config)?;

    match report.winner_name() {
        Some(name) => tracing::info!(turns = report.turns, "{name} wins"),
        None if report.finished => tracing::info!(turns = report.turns, "no winner"),
        None => tracing::warn!(turns = report.turns, "duel stopped before it ended"),
    }

    Ok(())
}
