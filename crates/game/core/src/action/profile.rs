//! Archetype profiles - defense, costs, damage and re-queue rules.
//!
//! Every archetype is a static table. Adding an archetype means adding a
//! variant and its profile; the match in [`Archetype::profile`] keeps the set
//! exhaustive.

use arrayvec::ArrayVec;

use super::kind::{ActionKind, AvailableActions};
use crate::config::BattleConfig;
use crate::state::CharacterId;

/// Character archetype, fixed at spawn.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Archetype {
    Rogue,
    Mage,
}

impl Archetype {
    pub const fn profile(self) -> &'static ArchetypeProfile {
        match self {
            Self::Rogue => &ROGUE,
            Self::Mage => &MAGE,
        }
    }
}

/// Who goes back into the turn queue after an action, in append order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Requeue {
    /// The actor, once.
    SelfOnce,
    /// The actor, twice (two future turns).
    SelfTwice,
    /// The opponent, then the actor.
    OpponentThenSelf,
}

impl Requeue {
    /// Expands into the queue entries to append, in order.
    pub fn entries(
        self,
        actor: CharacterId,
        opponent: CharacterId,
    ) -> ArrayVec<CharacterId, { BattleConfig::MAX_REQUEUE }> {
        let mut entries = ArrayVec::new();
        match self {
            Self::SelfOnce => entries.push(actor),
            Self::SelfTwice => {
                entries.push(actor);
                entries.push(actor);
            }
            Self::OpponentThenSelf => {
                entries.push(opponent);
                entries.push(actor);
            }
        }
        entries
    }
}

/// Cost, raw damage and re-queue rule of one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionProfile {
    /// Resource points spent.
    pub cost: u32,
    /// Raw damage before the defender's defense term.
    pub power: u32,
    pub requeue: Requeue,
}

impl ActionProfile {
    /// Defender health after taking this action.
    ///
    /// `health - power + defense`, floored at 0 and capped at `max_health`.
    /// The defense term is added back onto the defender's health.
    pub fn resolve_health(&self, health: u32, defense: u32, max_health: u32) -> u32 {
        let after = i64::from(health) - i64::from(self.power) + i64::from(defense);
        after.clamp(0, i64::from(max_health)) as u32
    }
}

/// Static combat table for one archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeProfile {
    pub defense: u32,
    pub attack: ActionProfile,
    pub special: ActionProfile,
}

impl ArchetypeProfile {
    pub const fn action(&self, kind: ActionKind) -> &ActionProfile {
        match kind {
            ActionKind::Attack => &self.attack,
            ActionKind::Special => &self.special,
        }
    }

    /// Actions affordable with `resource` points.
    pub fn available_actions(&self, resource: u32) -> AvailableActions {
        let mut actions = AvailableActions::new();
        if resource >= self.special.cost {
            actions.push(ActionKind::Attack);
            actions.push(ActionKind::Special);
        } else if resource >= self.attack.cost {
            actions.push(ActionKind::Attack);
        }
        actions
    }
}

pub const ROGUE: ArchetypeProfile = ArchetypeProfile {
    defense: 10,
    attack: ActionProfile {
        cost: 3,
        power: 15,
        requeue: Requeue::SelfOnce,
    },
    special: ActionProfile {
        cost: 10,
        power: 20,
        requeue: Requeue::SelfTwice,
    },
};

pub const MAGE: ArchetypeProfile = ArchetypeProfile {
    defense: 8,
    attack: ActionProfile {
        cost: 5,
        power: 20,
        requeue: Requeue::SelfOnce,
    },
    special: ActionProfile {
        cost: 30,
        power: 40,
        requeue: Requeue::OpponentThenSelf,
    },
};
