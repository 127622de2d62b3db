//! Headless duel client.
//!
//! Composition root for `duel-core`: reads configuration, builds the two
//! characters and drives the battle to its end, reporting through `tracing`.
//! Nothing is rendered; presentation layers read the same state and are out
//! of this crate.

pub mod config;
pub mod logging;
mod runner;

pub use config::DuelConfig;
pub use runner::{DuelReport, run_duel};
