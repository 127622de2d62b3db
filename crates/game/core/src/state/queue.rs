//! FIFO turn queue.
//!
//! The queue stores character ids in the order their turns were earned. The
//! same id may appear several times (one entry per pending turn). Lookups skip
//! entries whose character cannot currently act, but skipped entries stay in
//! place until they are dequeued.
//!
//! "Empty" here means nobody can act right now, not zero entries.

use std::collections::VecDeque;

use super::character::Character;
use super::common::CharacterId;
use super::roster::Roster;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnQueue {
    entries: VecDeque<CharacterId>,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` to the back. Duplicates are allowed.
    pub fn enqueue(&mut self, id: CharacterId) {
        self.entries.push_back(id);
    }

    /// Position and id of the first entry whose character can act.
    fn find_actionable(&self, roster: &Roster) -> Option<(usize, CharacterId)> {
        self.entries.iter().enumerate().find_map(|(index, &id)| {
            let actionable = roster.get(id).is_some_and(|c| c.is_actionable());
            if !actionable {
                tracing::trace!(%id, index, "skipping queue entry without a legal action");
            }
            actionable.then_some((index, id))
        })
    }

    /// First character, front to back, with at least one legal action.
    pub fn first_actionable(&self, roster: &Roster) -> Option<CharacterId> {
        self.find_actionable(roster).map(|(_, id)| id)
    }

    /// Same as [`first_actionable`](Self::first_actionable); never removes.
    pub fn peek(&self, roster: &Roster) -> Option<CharacterId> {
        self.first_actionable(roster)
    }

    /// Removes and returns the first actionable entry.
    ///
    /// Entries skipped on the way stay where they are. Returns `None` without
    /// touching the queue when nobody can act.
    pub fn dequeue(&mut self, roster: &Roster) -> Option<CharacterId> {
        let (index, _) = self.find_actionable(roster)?;
        self.entries.remove(index)
    }

    /// True when no queued character can act, even if entries remain.
    pub fn is_empty(&self, roster: &Roster) -> bool {
        self.first_actionable(roster).is_none()
    }

    /// Over when nobody can act, or any queued character has 0 health.
    pub fn is_over(&self, roster: &Roster) -> bool {
        self.is_empty(roster) || self.queued(roster).any(|c| !c.is_alive())
    }

    /// First queued character with health left, once the battle is over.
    ///
    /// Scan order decides: survivors are not checked for uniqueness. `None`
    /// while the battle is running or when every queued character is down.
    pub fn winner(&self, roster: &Roster) -> Option<CharacterId> {
        if !self.is_over(roster) {
            return None;
        }
        self.queued(roster).find(|c| c.is_alive()).map(|c| c.id())
    }

    fn queued<'r>(&'r self, roster: &'r Roster) -> impl Iterator<Item = &'r Character> {
        self.entries.iter().filter_map(|&id| roster.get(id))
    }

    /// Raw number of entries, actionable or not.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Raw entries, front to back.
    pub fn entries(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.entries.iter().copied()
    }

    /// The last `n` entries (fewer if the queue is shorter), front to back.
    pub fn tail(&self, n: usize) -> Vec<CharacterId> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).copied().collect()
    }
}
