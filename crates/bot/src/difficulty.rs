//! Difficulty levels and the tier each one plays at.

use serde::{Deserialize, Serialize};
use std::fmt;

use magic_core::CoreError;

/// A bot level in `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(level: u8) -> Result<Self, CoreError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(CoreError::InvalidDifficulty(level))
        }
    }

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> Tier {
        Tier::for_level(self.0)
    }

    /// Every valid level, lowest first.
    pub fn all() -> impl Iterator<Item = Difficulty> {
        (Self::MIN..=Self::MAX).map(Difficulty)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = CoreError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Levels 1-3: random sampling.
    Novice,
    /// Levels 4-7: random capture.
    Intermediate,
    /// Levels 8-10: greedy material search.
    Expert,
}

impl Tier {
    pub fn for_level(level: u8) -> Tier {
        match level {
            8.. => Tier::Expert,
            4..=7 => Tier::Intermediate,
            _ => Tier::Novice,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Novice => "novice",
            Tier::Intermediate => "intermediate",
            Tier::Expert => "expert",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[path = "difficulty_tests.rs"]
mod difficulty_tests;
