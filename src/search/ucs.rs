//! Uniform-cost search

use super::frontier::best_first;
use super::{SearchOutcome, SearchStrategy};
use crate::core::WordGraph;

/// Dijkstra-style search ordered by accumulated path length
///
/// Equivalent to breadth-first for unit-weight edges, but driven by a
/// min-priority queue so weighted extensions slot in without a new frontier.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

impl SearchStrategy for UniformCost {
    fn search(&self, graph: &WordGraph<'_>, start: &str, target: &str) -> SearchOutcome {
        let outcome = best_first(graph, start, target, |_| 0);
        log::trace!(
            "ucs {start} -> {target}: expanded {}, found {}",
            outcome.expanded,
            outcome.path.is_some()
        );
        outcome
    }
}
