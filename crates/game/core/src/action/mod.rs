//! Action domain - what a character can do and what it costs.
//!
//! - `kind`: `ActionKind`, the strategy-facing `ActionChoice` label and the
//!   fixed-capacity `AvailableActions` list
//! - `profile`: per-archetype tables (defense, costs, damage, re-queue rule)

pub mod kind;
pub mod profile;

pub use kind::{ActionChoice, ActionKind, AvailableActions};
pub use profile::{ActionProfile, Archetype, ArchetypeProfile, Requeue};
