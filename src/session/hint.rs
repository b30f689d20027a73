//! Hints for the next move

use crate::core::LetterChange;
use crate::error::LadderError;
use crate::search::{Algorithm, SearchPath};
use std::str::FromStr;

/// How much a hint reveals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintDetail {
    /// Next word and the letter to change
    #[default]
    Basic,
    /// Also the whole remaining ladder
    Full,
}

impl HintDetail {
    /// Resolve a detail level from its name ("basic" or "full")
    ///
    /// # Errors
    /// Returns `LadderError::InvalidArgument` for any other name.
    pub fn from_name(name: &str) -> Result<Self, LadderError> {
        match name {
            "basic" => Ok(Self::Basic),
            "full" => Ok(Self::Full),
            other => Err(LadderError::invalid_argument(format!(
                "unknown hint detail '{other}' (expected basic or full)"
            ))),
        }
    }
}

impl FromStr for HintDetail {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Suggested next move toward the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// First word after the current one on a shortest ladder
    pub next_word: Option<String>,
    /// Which letter to change to reach `next_word`
    pub change: Option<LetterChange>,
    pub explanation: String,
    /// Remaining ladder from the current word, only with `HintDetail::Full`
    pub full_path: Option<SearchPath>,
    /// Algorithm that produced the hint
    pub algorithm: Algorithm,
}

impl Hint {
    pub(crate) fn unreachable(algorithm: Algorithm) -> Self {
        Self {
            next_word: None,
            change: None,
            explanation: "No valid path found.".to_string(),
            full_path: None,
            algorithm,
        }
    }

    /// Whether the hint actually suggests a move
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.next_word.is_some()
    }
}
