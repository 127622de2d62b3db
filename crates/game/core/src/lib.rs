//! Deterministic two-character turn-based combat.
//!
//! `duel-core` defines the canonical rules: characters and their archetype
//! tables, the FIFO turn queue, playstyles that pick actions, and the engine
//! that resolves them. It does no I/O and renders nothing; a driving caller
//! peeks the next actor, asks its playstyle, and lets the engine resolve the
//! action. All state mutation flows through [`engine::BattleEngine`].
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod rng;
pub mod state;
pub mod strategy;

pub use action::{
    ActionChoice, ActionKind, ActionProfile, Archetype, ArchetypeProfile, AvailableActions,
    Requeue,
};
pub use config::BattleConfig;
pub use engine::{ActionOutcome, BattleEngine, ExecuteError, TurnOutcome};
pub use error::{BattleError, ErrorSeverity};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use state::{
    AnimationFrame, AnimationKind, AnimationState, BattleState, Character, CharacterId,
    CharacterSpec, ResourceMeter, Roster, SetupError, TurnQueue,
};
pub use strategy::Playstyle;
