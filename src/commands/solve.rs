//! Ladder solving command
//!
//! Runs one or more search algorithms on a start/target pair and collects
//! each ladder with its expansion count and timing.

use crate::core::{Lexicon, WordGraph, normalize};
use crate::error::{LadderError, Result};
use crate::search::{Algorithm, SearchPath, SearchStrategy};
use std::time::{Duration, Instant};

/// Configuration for solving a pair
pub struct SolveConfig {
    pub start: String,
    pub target: String,
    pub algorithms: Vec<Algorithm>,
}

impl SolveConfig {
    /// Solve with every algorithm
    #[must_use]
    pub fn new(start: String, target: String) -> Self {
        Self {
            start,
            target,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithms = vec![algorithm];
        self
    }
}

/// One algorithm's answer
pub struct SolveRun {
    pub algorithm: Algorithm,
    pub path: Option<SearchPath>,
    pub expanded: usize,
    pub duration: Duration,
}

/// Result of solving a pair
pub struct SolveResult {
    pub start: String,
    pub target: String,
    pub runs: Vec<SolveRun>,
}

impl SolveResult {
    /// Shortest ladder length, if any run found one
    #[must_use]
    pub fn best_steps(&self) -> Option<usize> {
        self.runs
            .iter()
            .filter_map(|run| run.path.as_ref().map(SearchPath::steps))
            .min()
    }
}

/// Solve a pair against the unrestricted dictionary
///
/// A disconnected pair is not an error; its runs carry no path.
///
/// # Errors
///
/// Returns `InvalidArgument` if either word is malformed or missing from the
/// dictionary, or if the words differ in length.
pub fn solve_ladder(config: SolveConfig, lexicon: &Lexicon) -> Result<SolveResult> {
    let start = checked_word(lexicon, &config.start)?;
    let target = checked_word(lexicon, &config.target)?;
    if start.len() != target.len() {
        return Err(LadderError::invalid_argument(format!(
            "'{start}' and '{target}' have different lengths"
        )));
    }

    let graph = WordGraph::unrestricted(lexicon);
    let runs = config
        .algorithms
        .iter()
        .map(|&algorithm| {
            let timer = Instant::now();
            let outcome = algorithm.search(&graph, &start, &target);
            SolveRun {
                algorithm,
                path: outcome.path,
                expanded: outcome.expanded,
                duration: timer.elapsed(),
            }
        })
        .collect();

    Ok(SolveResult {
        start,
        target,
        runs,
    })
}

fn checked_word(lexicon: &Lexicon, raw: &str) -> Result<String> {
    let word = normalize(raw.trim())
        .ok_or_else(|| LadderError::invalid_argument(format!("'{raw}' is not a word")))?;
    if lexicon.contains(&word) {
        Ok(word)
    } else {
        Err(LadderError::invalid_argument(format!(
            "'{word}' is not in the dictionary"
        )))
    }
}
