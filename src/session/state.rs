//! Session state machine
//!
//! `PLAYING` moves to `WON` or `LOST`; both are terminal.

use super::{Hint, HintDetail};
use crate::core::{Lexicon, ObstacleSet, WordGraph, letter_change};
use crate::error::{LadderError, MoveRejection, Result};
use crate::puzzle::{Difficulty, Puzzle};
use crate::search::{Algorithm, SearchStrategy};
use std::fmt;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Playing => "PLAYING",
            Self::Won => "WON",
            Self::Lost => "LOST",
        }
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a rendering layer may observe about a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub start_word: String,
    pub current_word: String,
    pub target_word: String,
    pub moves_used: usize,
    pub max_moves: usize,
    pub path: Vec<String>,
    pub status: GameStatus,
    pub difficulty: Difficulty,
    pub banned_words: Vec<String>,
    pub restricted_letters: Vec<char>,
}

impl SessionSnapshot {
    #[must_use]
    pub const fn moves_remaining(&self) -> usize {
        self.max_moves.saturating_sub(self.moves_used)
    }
}

/// One puzzle in progress
///
/// Owns its obstacle set; the lexicon is passed in by the caller on every
/// operation and never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    start_word: String,
    current_word: String,
    target_word: String,
    moves_used: usize,
    max_moves: usize,
    path: Vec<String>,
    status: GameStatus,
    difficulty: Difficulty,
    obstacles: ObstacleSet,
}

impl Session {
    /// Fresh session at the start word
    #[must_use]
    pub fn new(
        start_word: impl Into<String>,
        target_word: impl Into<String>,
        difficulty: Difficulty,
        max_moves: usize,
        obstacles: ObstacleSet,
    ) -> Self {
        let start_word = start_word.into();
        Self {
            current_word: start_word.clone(),
            path: vec![start_word.clone()],
            start_word,
            target_word: target_word.into(),
            moves_used: 0,
            max_moves,
            status: GameStatus::Playing,
            difficulty,
            obstacles,
        }
    }

    #[must_use]
    pub fn from_puzzle(puzzle: Puzzle) -> Self {
        Self::new(
            puzzle.start,
            puzzle.target,
            puzzle.difficulty,
            puzzle.max_moves,
            puzzle.obstacles,
        )
    }

    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    #[must_use]
    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn moves_used(&self) -> usize {
        self.moves_used
    }

    #[must_use]
    pub const fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Check a candidate move without applying it
    ///
    /// # Errors
    /// Returns the first rule the word breaks: unknown word, banned word,
    /// restricted letter, or not exactly one substitution from the current word.
    pub fn validate_move(&self, lexicon: &Lexicon, word: &str) -> Result<(), MoveRejection> {
        if !lexicon.contains(word) {
            return Err(MoveRejection::NotInDictionary(word.to_string()));
        }
        if self.obstacles.is_banned(word) {
            return Err(MoveRejection::Banned(word.to_string()));
        }
        if let Some(letter) = self.obstacles.restricted_letter_in(word) {
            return Err(MoveRejection::RestrictedLetter {
                word: word.to_string(),
                letter,
            });
        }
        if letter_change(&self.current_word, word).is_none() {
            return Err(MoveRejection::NotOneSubstitution {
                from: self.current_word.clone(),
                to: word.to_string(),
            });
        }
        Ok(())
    }

    /// Apply a move and return the resulting status
    ///
    /// Input is trimmed and lowercased first. A rejected move leaves the
    /// session untouched.
    ///
    /// # Errors
    /// `InvalidState` once the session is won or lost, `InvalidMove` for an
    /// illegal word.
    pub fn make_move(&mut self, lexicon: &Lexicon, next_word: &str) -> Result<GameStatus> {
        if self.status.is_finished() {
            return Err(LadderError::invalid_state(format!(
                "the puzzle is already {}",
                self.status
            )));
        }

        let word = next_word.trim().to_ascii_lowercase();
        self.validate_move(lexicon, &word)?;

        self.moves_used += 1;
        self.path.push(word.clone());
        self.current_word = word;

        if self.current_word == self.target_word {
            self.status = GameStatus::Won;
        } else if self.moves_used >= self.max_moves {
            self.status = GameStatus::Lost;
        }

        log::debug!(
            "move {}/{} to '{}': {}",
            self.moves_used,
            self.max_moves,
            self.current_word,
            self.status
        );
        Ok(self.status)
    }

    /// Best next move from the current word under this session's obstacles
    ///
    /// Read-only; repeated calls without a move return the same word.
    #[must_use]
    pub fn hint(&self, lexicon: &Lexicon, algorithm: Algorithm, detail: HintDetail) -> Hint {
        let graph = WordGraph::new(lexicon, &self.obstacles);
        let Some(path) = algorithm.find_path(&graph, &self.current_word, &self.target_word) else {
            return Hint::unreachable(algorithm);
        };
        let Some(next_word) = path.next_word().map(str::to_string) else {
            return Hint::unreachable(algorithm);
        };

        let change = letter_change(&self.current_word, &next_word);
        let explanation = change.map_or_else(
            || format!("Move to '{next_word}'."),
            |change| change.to_string(),
        );

        Hint {
            next_word: Some(next_word),
            change,
            explanation,
            full_path: (detail == HintDetail::Full).then_some(path),
            algorithm,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            start_word: self.start_word.clone(),
            current_word: self.current_word.clone(),
            target_word: self.target_word.clone(),
            moves_used: self.moves_used,
            max_moves: self.max_moves,
            path: self.path.clone(),
            status: self.status,
            difficulty: self.difficulty,
            banned_words: self.obstacles.banned_words().map(str::to_string).collect(),
            restricted_letters: self.obstacles.restricted_letters().collect(),
        }
    }
}
