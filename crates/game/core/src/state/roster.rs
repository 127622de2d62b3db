//! Arena of characters addressed by [`CharacterId`].

use super::character::Character;
use super::common::CharacterId;
use super::error::SetupError;
use crate::action::Archetype;
use crate::strategy::Playstyle;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a character and returns its id. Ids are dense and never reused.
    pub fn spawn(
        &mut self,
        name: impl Into<String>,
        archetype: Archetype,
        playstyle: Playstyle,
    ) -> CharacterId {
        let id = CharacterId(self.characters.len() as u32);
        self.characters
            .push(Character::new(id, name, archetype, playstyle));
        id
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(id.index())
    }

    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.get_mut(id.index())
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        id.index() < self.characters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Makes `a` and `b` each other's opponent.
    pub fn link_opponents(&mut self, a: CharacterId, b: CharacterId) -> Result<(), SetupError> {
        if a == b {
            return Err(SetupError::SelfOpponent(a));
        }
        for id in [a, b] {
            if !self.contains(id) {
                return Err(SetupError::UnknownCharacter(id));
            }
        }

        if let Some(first) = self.get_mut(a) {
            first.set_opponent(b);
        }
        if let Some(second) = self.get_mut(b) {
            second.set_opponent(a);
        }
        Ok(())
    }

    /// Mutable access to two distinct characters at once.
    ///
    /// Returns `None` if the ids are equal or either is unknown.
    pub fn pair_mut(
        &mut self,
        a: CharacterId,
        b: CharacterId,
    ) -> Option<(&mut Character, &mut Character)> {
        let (i, j) = (a.index(), b.index());
        if i == j || i >= self.characters.len() || j >= self.characters.len() {
            return None;
        }

        if i < j {
            let (left, right) = self.characters.split_at_mut(j);
            Some((&mut left[i], &mut right[0]))
        } else {
            let (left, right) = self.characters.split_at_mut(i);
            Some((&mut right[0], &mut left[j]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_is_mutual() {
        let mut roster = Roster::new();
        let rogue = roster.spawn("r", Archetype::Rogue, Playstyle::Manual);
        let mage = roster.spawn("m", Archetype::Mage, Playstyle::Random);

        roster.link_opponents(rogue, mage).unwrap();

        assert_eq!(roster.get(rogue).unwrap().opponent(), Some(mage));
        assert_eq!(roster.get(mage).unwrap().opponent(), Some(rogue));
    }

    #[test]
    fn link_rejects_self_and_unknown() {
        let mut roster = Roster::new();
        let rogue = roster.spawn("r", Archetype::Rogue, Playstyle::Manual);

        assert_eq!(
            roster.link_opponents(rogue, rogue),
            Err(SetupError::SelfOpponent(rogue))
        );
        assert_eq!(
            roster.link_opponents(rogue, CharacterId(7)),
            Err(SetupError::UnknownCharacter(CharacterId(7)))
        );
        assert_eq!(roster.get(rogue).unwrap().opponent(), None);
    }

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut roster = Roster::new();
        let a = roster.spawn("a", Archetype::Rogue, Playstyle::Manual);
        let b = roster.spawn("b", Archetype::Mage, Playstyle::Manual);

        let (first, second) = roster.pair_mut(b, a).unwrap();
        assert_eq!(first.id(), b);
        assert_eq!(second.id(), a);

        assert!(roster.pair_mut(a, a).is_none());
        assert!(roster.pair_mut(a, CharacterId(9)).is_none());
    }
}
