//! Difficulty tiers
//!
//! A tier bounds word length and the move budget and decides whether obstacles
//! are injected. The table is fixed once an engine is built.

use crate::error::LadderError;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Named difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Beginner,
    Advanced,
    Challenge,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Advanced, Self::Challenge];

    /// Resolve a tier from its name
    ///
    /// Supported names: "BEGINNER", "ADVANCED", "CHALLENGE"
    ///
    /// # Errors
    /// Returns `LadderError::InvalidArgument` for any other name.
    pub fn from_name(name: &str) -> Result<Self, LadderError> {
        match name {
            "BEGINNER" => Ok(Self::Beginner),
            "ADVANCED" => Ok(Self::Advanced),
            "CHALLENGE" => Ok(Self::Challenge),
            other => Err(LadderError::invalid_argument(format!(
                "unknown difficulty '{other}' (expected BEGINNER, ADVANCED or CHALLENGE)"
            ))),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Advanced => "ADVANCED",
            Self::Challenge => "CHALLENGE",
        }
    }

    /// Tier shown for a custom pair of the given word length
    #[must_use]
    pub const fn for_word_length(length: usize) -> Self {
        if length <= 4 {
            Self::Beginner
        } else if length <= 5 {
            Self::Advanced
        } else {
            Self::Challenge
        }
    }
}

impl FromStr for Difficulty {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration of one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub max_moves: usize,
    pub obstacles: bool,
}

impl TierConfig {
    #[must_use]
    pub const fn new(min_length: usize, max_length: usize, max_moves: usize, obstacles: bool) -> Self {
        Self {
            min_length,
            max_length,
            max_moves,
            obstacles,
        }
    }

    #[must_use]
    pub const fn lengths(&self) -> RangeInclusive<usize> {
        self.min_length..=self.max_length
    }
}

/// Configuration for every tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    beginner: TierConfig,
    advanced: TierConfig,
    challenge: TierConfig,
}

impl TierTable {
    #[must_use]
    pub const fn new(beginner: TierConfig, advanced: TierConfig, challenge: TierConfig) -> Self {
        Self {
            beginner,
            advanced,
            challenge,
        }
    }

    #[must_use]
    pub const fn get(&self, difficulty: Difficulty) -> &TierConfig {
        match difficulty {
            Difficulty::Beginner => &self.beginner,
            Difficulty::Advanced => &self.advanced,
            Difficulty::Challenge => &self.challenge,
        }
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::new(
            TierConfig::new(3, 4, 5, false),
            TierConfig::new(4, 5, 7, false),
            TierConfig::new(5, 6, 10, true),
        )
    }
}
