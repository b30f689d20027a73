//! Puzzle pair generation
//!
//! Obstacles are drawn speculatively and validated after the fact: a pair is
//! only accepted once A* connects it under the very obstacles the puzzle ships
//! with, so every issued puzzle is solvable under its own constraints.

use super::{Difficulty, TierConfig, TierTable};
use crate::core::{ALPHABET, Lexicon, ObstacleSet, WordGraph};
use crate::error::{LadderError, Result};
use crate::search::{AStar, SearchPath, SearchStrategy};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::ops::RangeInclusive;

/// Tuning knobs for the generator's bounded retry loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Pair draws per round before giving up on that round (default: 100)
    pub attempts_per_round: usize,
    /// Rounds with freshly drawn obstacles before one final obstacle-free round (default: 1)
    pub obstacle_rounds: usize,
    /// Upper bound on banned words per puzzle (default: 10)
    pub max_banned_words: usize,
    /// Letters are restricted only if more words than this remain after banning (default: 50)
    pub letter_restriction_threshold: usize,
    /// How many letters to restrict when restricting at all (default: 1..=2)
    pub restricted_letters: RangeInclusive<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            attempts_per_round: 100,
            obstacle_rounds: 1,
            max_banned_words: 10,
            letter_restriction_threshold: 50,
            restricted_letters: 1..=2,
        }
    }
}

/// A generated, verified puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub start: String,
    pub target: String,
    pub difficulty: Difficulty,
    pub max_moves: usize,
    pub obstacles: ObstacleSet,
    /// Shortest ladder found while verifying the pair
    pub solution: SearchPath,
}

impl Puzzle {
    /// Fewest moves that solve the puzzle
    #[must_use]
    pub fn par(&self) -> usize {
        self.solution.steps()
    }
}

/// Draws random solvable word pairs from a lexicon
pub struct PuzzleGenerator<'a> {
    lexicon: &'a Lexicon,
    tiers: TierTable,
    config: GeneratorConfig,
}

impl<'a> PuzzleGenerator<'a> {
    /// Generator with the default tier table and retry policy
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_config(lexicon, TierTable::default(), GeneratorConfig::default())
    }

    #[must_use]
    pub const fn with_config(lexicon: &'a Lexicon, tiers: TierTable, config: GeneratorConfig) -> Self {
        Self {
            lexicon,
            tiers,
            config,
        }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    #[must_use]
    pub const fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    /// Candidate words for a tier: every lexicon word within its length bounds
    #[must_use]
    pub fn pool(&self, difficulty: Difficulty) -> Vec<&'a str> {
        self.lexicon
            .words_in_length_range(self.tiers.get(difficulty).lengths())
    }

    /// Generate a solvable puzzle for `difficulty`
    ///
    /// Runs `obstacle_rounds` rounds with fresh obstacles (only for tiers that
    /// use them), then one round without. Each round makes at most
    /// `attempts_per_round` draws.
    ///
    /// # Errors
    /// Returns `LadderError::GenerationFailure` when the tier's pool has fewer
    /// than two words or every round runs out of attempts.
    pub fn generate<R: Rng + ?Sized>(&self, difficulty: Difficulty, rng: &mut R) -> Result<Puzzle> {
        let tier = *self.tiers.get(difficulty);
        let pool = self.pool(difficulty);

        if pool.len() < 2 {
            log::debug!("{difficulty}: pool of {} words is too small", pool.len());
            return Err(LadderError::GenerationFailure {
                difficulty,
                attempts: 0,
            });
        }

        let obstacle_rounds = if tier.obstacles {
            self.config.obstacle_rounds
        } else {
            0
        };
        let rounds = obstacle_rounds + 1;

        for round in 0..rounds {
            let obstacles = if round < obstacle_rounds {
                self.draw_obstacles(&pool, rng)
            } else {
                ObstacleSet::default()
            };
            log::debug!(
                "{difficulty}: round {} with {} banned words and {} restricted letters",
                round + 1,
                obstacles.banned_words().count(),
                obstacles.restricted_letters().count()
            );

            if let Some(puzzle) = self.try_round(difficulty, &tier, &pool, obstacles, rng) {
                log::debug!(
                    "{difficulty}: accepted {} -> {} (par {})",
                    puzzle.start,
                    puzzle.target,
                    puzzle.par()
                );
                return Ok(puzzle);
            }
        }

        Err(LadderError::GenerationFailure {
            difficulty,
            attempts: rounds * self.config.attempts_per_round,
        })
    }

    /// Generate just the (start, target) pair
    ///
    /// # Errors
    /// Same as [`PuzzleGenerator::generate`].
    pub fn generate_pair<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<(String, String)> {
        self.generate(difficulty, rng)
            .map(|puzzle| (puzzle.start, puzzle.target))
    }

    /// Draw a fresh obstacle set from a tier's pool
    ///
    /// Bans up to `max_banned_words` pool words; if more than
    /// `letter_restriction_threshold` words remain, also restricts a few letters.
    /// No attempt is made to keep the graph connected; the chosen pair is
    /// verified afterwards instead.
    pub fn draw_obstacles<R: Rng + ?Sized>(&self, pool: &[&str], rng: &mut R) -> ObstacleSet {
        let ban_count = self.config.max_banned_words.min(pool.len());
        let banned: Vec<&str> = pool.choose_multiple(rng, ban_count).copied().collect();

        let remaining = pool.len() - banned.len();
        let letters: Vec<char> = if remaining > self.config.letter_restriction_threshold
            && !self.config.restricted_letters.is_empty()
        {
            let count = rng.random_range(self.config.restricted_letters.clone());
            ALPHABET[..]
                .choose_multiple(rng, count)
                .map(|&b| char::from(b))
                .collect()
        } else {
            Vec::new()
        };

        ObstacleSet::new(banned, letters)
    }

    /// One round of draws under a fixed obstacle set
    fn try_round<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        tier: &TierConfig,
        pool: &[&str],
        obstacles: ObstacleSet,
        rng: &mut R,
    ) -> Option<Puzzle> {
        // Endpoints must themselves be legal ladder words
        let eligible: Vec<&str> = pool
            .iter()
            .copied()
            .filter(|word| obstacles.allows(word))
            .collect();

        let mut by_length: FxHashMap<usize, Vec<&str>> = FxHashMap::default();
        for &word in &eligible {
            by_length.entry(word.len()).or_default().push(word);
        }

        let graph = WordGraph::new(self.lexicon, &obstacles);
        let (start, target, solution) = (0..self.config.attempts_per_round).find_map(|_| {
            let start = *eligible.choose(rng)?;
            let target = *by_length.get(&start.len())?.choose(rng)?;
            if start == target {
                return None;
            }
            AStar
                .find_path(&graph, start, target)
                .map(|solution| (start, target, solution))
        })?;

        Some(Puzzle {
            start: start.to_string(),
            target: target.to_string(),
            difficulty,
            max_moves: tier.max_moves,
            obstacles,
            solution,
        })
    }
}
