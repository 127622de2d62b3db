use std::fmt;

/// Index of a character in the battle roster.
///
/// Opponent links and queue entries hold ids, never the characters themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub u32);

impl CharacterId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Integer resource meter (health, resource points) tracked per character.
///
/// `current` always stays within `0..=maximum`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: u32,
    maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// A meter starting at its maximum.
    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Removes up to `amount`, saturating at zero.
    ///
    /// Returns how much was actually removed.
    pub fn deplete(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_sub(amount);
        before - self.current
    }

    /// Adds up to `amount`, saturating at `maximum`.
    ///
    /// Returns how much was actually added.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.maximum);
        self.current - before
    }

    /// Overwrites the current value, clamped into `0..=maximum`.
    pub fn set(&mut self, value: u32) {
        self.current = value.min(self.maximum);
    }
}

impl fmt::Display for ResourceMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.maximum)
    }
}
