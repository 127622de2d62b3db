/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Base seed for the deterministic RNG used by random playstyles.
    /// Combined with the action nonce so every decision gets its own roll.
    pub seed: u64,
}

impl BattleConfig {
    // ===== compile-time constants =====
    /// Starting and maximum health for every character.
    pub const MAX_HEALTH: u32 = 100;
    /// Starting and maximum resource points for every character.
    pub const MAX_RESOURCE: u32 = 100;
    /// Most queue entries a single action can append.
    pub const MAX_REQUEUE: usize = 2;
    /// Number of distinct actions a character can know.
    pub const MAX_ACTIONS: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEED: u64 = 0x5eed_d0e1;

    pub fn new() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
