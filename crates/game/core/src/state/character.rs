//! Combat participants.

use std::fmt;

use super::common::{CharacterId, ResourceMeter};
use crate::action::{ActionKind, Archetype, AvailableActions};
use crate::config::BattleConfig;
use crate::strategy::Playstyle;

/// Animation track a character is currently playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AnimationKind {
    Idle,
    Attack,
    Special,
}

impl From<ActionKind> for AnimationKind {
    fn from(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Attack => Self::Attack,
            ActionKind::Special => Self::Special,
        }
    }
}

/// One frame handed to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    pub frame: u8,
}

/// Presentation-only animation cursor. Combat never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationState {
    kind: AnimationKind,
    /// Last frame shown; `None` right after a restart.
    last_frame: Option<u8>,
}

impl AnimationState {
    pub const LAST_FRAME: u8 = 9;

    /// Idle, positioned so the next frame is idle frame 0.
    pub const fn idle() -> Self {
        Self {
            kind: AnimationKind::Idle,
            last_frame: Some(Self::LAST_FRAME),
        }
    }

    /// Starts `kind` from its first frame on the next [`advance`](Self::advance).
    pub fn restart(&mut self, kind: AnimationKind) {
        self.kind = kind;
        self.last_frame = None;
    }

    /// Steps to the next frame. A finished track falls back to idle.
    pub fn advance(&mut self) -> AnimationFrame {
        let frame = match self.last_frame {
            None => 0,
            Some(Self::LAST_FRAME) => {
                self.kind = AnimationKind::Idle;
                0
            }
            Some(n) => n + 1,
        };
        self.last_frame = Some(frame);
        AnimationFrame {
            kind: self.kind,
            frame,
        }
    }

    pub const fn kind(&self) -> AnimationKind {
        self.kind
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::idle()
    }
}

/// A combat participant.
///
/// Identity, archetype and playstyle are fixed at spawn. The opponent link is
/// set afterwards through [`Roster::link_opponents`](super::Roster::link_opponents).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    id: CharacterId,
    name: String,
    archetype: Archetype,
    playstyle: Playstyle,
    opponent: Option<CharacterId>,
    pub health: ResourceMeter,
    pub resource: ResourceMeter,
    pub animation: AnimationState,
}

impl Character {
    pub fn new(
        id: CharacterId,
        name: impl Into<String>,
        archetype: Archetype,
        playstyle: Playstyle,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            archetype,
            playstyle,
            opponent: None,
            health: ResourceMeter::full(BattleConfig::MAX_HEALTH),
            resource: ResourceMeter::full(BattleConfig::MAX_RESOURCE),
            animation: AnimationState::idle(),
        }
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn playstyle(&self) -> Playstyle {
        self.playstyle
    }

    pub fn opponent(&self) -> Option<CharacterId> {
        self.opponent
    }

    pub(crate) fn set_opponent(&mut self, opponent: CharacterId) {
        self.opponent = Some(opponent);
    }

    /// Current health.
    pub fn hp(&self) -> u32 {
        self.health.current()
    }

    /// Current resource points.
    pub fn sp(&self) -> u32 {
        self.resource.current()
    }

    pub fn defense(&self) -> u32 {
        self.archetype.profile().defense
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }

    /// Actions affordable with the current resource points.
    pub fn available_actions(&self) -> AvailableActions {
        self.archetype.profile().available_actions(self.sp())
    }

    pub fn is_action_legal(&self, kind: ActionKind) -> bool {
        self.available_actions().contains(&kind)
    }

    /// Alive and able to afford at least one action.
    pub fn is_actionable(&self) -> bool {
        self.is_alive() && !self.available_actions().is_empty()
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ({}) {}/{}",
            self.name,
            self.archetype,
            self.hp(),
            self.sp()
        )
    }
}
