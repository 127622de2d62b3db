//! Duel configuration loaded from the environment.
use std::env;

use duel_core::{Archetype, BattleConfig, CharacterSpec, Playstyle};

/// Settings for one headless duel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuelConfig {
    pub battle: BattleConfig,
    /// Safety cap on resolved turns.
    pub max_turns: usize,
    pub first: CharacterSpec,
    pub second: CharacterSpec,
}

impl DuelConfig {
    pub const DEFAULT_MAX_TURNS: usize = 500;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_SEED` - Base RNG seed (default: `BattleConfig::DEFAULT_SEED`)
    /// - `DUEL_MAX_TURNS` - Turn cap (default: 500, minimum 1)
    /// - `DUEL_FIRST_NAME` / `DUEL_FIRST_ARCHETYPE` - First character (default: Sophia, rogue)
    /// - `DUEL_SECOND_NAME` / `DUEL_SECOND_ARCHETYPE` - Second character (default: Mike, mage)
    ///
    /// Unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let parse = |key: &str| read(key).and_then(|value| value.trim().parse::<Archetype>().ok());

        let mut config = Self::default();

        if let Some(seed) = read("DUEL_SEED").and_then(|v| v.trim().parse::<u64>().ok()) {
            config.battle = BattleConfig::with_seed(seed);
        }
        if let Some(max) = read("DUEL_MAX_TURNS").and_then(|v| v.trim().parse::<usize>().ok()) {
            config.max_turns = max.max(1);
        }

        if let Some(name) = read("DUEL_FIRST_NAME") {
            config.first.name = name;
        }
        if let Some(archetype) = parse("DUEL_FIRST_ARCHETYPE") {
            config.first.archetype = archetype;
        }
        if let Some(name) = read("DUEL_SECOND_NAME") {
            config.second.name = name;
        }
        if let Some(archetype) = parse("DUEL_SECOND_ARCHETYPE") {
            config.second.archetype = archetype;
        }

        config
    }
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            max_turns: Self::DEFAULT_MAX_TURNS,
            first: CharacterSpec::new("Sophia", Archetype::Rogue, Playstyle::Random),
            second: CharacterSpec::new("Mike", Archetype::Mage, Playstyle::Random),
        }
    }
}
