//! Error types for the ladder engine
//!
//! Every failure the engine reports is one of these variants. A search that
//! finds no path is not an error; it returns `None`.

use crate::puzzle::Difficulty;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T, E = LadderError> = std::result::Result<T, E>;

/// Failures reported synchronously to the caller of the engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    /// Unknown tier, algorithm or detail name, or a malformed custom pair
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation requires an active session that is still being played
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The submitted word is not a legal next step
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveRejection),

    /// A custom pair has no connecting ladder
    #[error("no ladder connects '{start}' to '{target}'")]
    Unsolvable { start: String, target: String },

    /// The generator ran out of attempts for a tier
    #[error("could not generate a connected {difficulty} puzzle in {attempts} attempts")]
    GenerationFailure {
        difficulty: Difficulty,
        attempts: usize,
    },
}

impl LadderError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

/// Why a move was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),

    #[error("'{0}' is banned in this puzzle")]
    Banned(String),

    #[error("'{word}' uses the restricted letter '{letter}'")]
    RestrictedLetter { word: String, letter: char },

    #[error("'{to}' is not exactly one letter away from '{from}'")]
    NotOneSubstitution { from: String, to: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_rejection_converts_into_invalid_move() {
        let err: LadderError = MoveRejection::Banned("cot".to_string()).into();
        assert_eq!(
            err,
            LadderError::InvalidMove(MoveRejection::Banned("cot".to_string()))
        );
    }

    #[test]
    fn messages_name_the_offending_words() {
        let err = LadderError::Unsolvable {
            start: "cat".to_string(),
            target: "ink".to_string(),
        };
        assert_eq!(err.to_string(), "no ladder connects 'cat' to 'ink'");

        let err = LadderError::from(MoveRejection::RestrictedLetter {
            word: "cog".to_string(),
            letter: 'g',
        });
        assert_eq!(
            err.to_string(),
            "invalid move: 'cog' uses the restricted letter 'g'"
        );
    }

    #[test]
    fn generation_failure_mentions_tier() {
        let err = LadderError::GenerationFailure {
            difficulty: Difficulty::Challenge,
            attempts: 200,
        };
        assert_eq!(
            err.to_string(),
            "could not generate a connected CHALLENGE puzzle in 200 attempts"
        );
    }
}
