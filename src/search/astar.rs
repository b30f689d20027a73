//! A* search with a Hamming-distance heuristic

use super::frontier::best_first;
use super::{SearchOutcome, SearchStrategy};
use crate::core::{WordGraph, hamming_distance};

/// Heuristic best-first search
///
/// Orders the frontier by `g + h`, where `g` counts substitutions so far and
/// `h` is the Hamming distance to the target. Each edge changes one letter and
/// so lowers `h` by at most one: the heuristic is consistent and the first
/// path popped for the target is shortest.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl SearchStrategy for AStar {
    fn search(&self, graph: &WordGraph<'_>, start: &str, target: &str) -> SearchOutcome {
        let outcome = best_first(graph, start, target, |word| {
            hamming_distance(word, target)
        });
        log::trace!(
            "a_star {start} -> {target}: expanded {}, found {}",
            outcome.expanded,
            outcome.path.is_some()
        );
        outcome
    }
}
