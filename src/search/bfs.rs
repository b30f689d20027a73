//! Breadth-first search

use super::frontier::endpoints_searchable;
use super::{SearchOutcome, SearchPath, SearchStrategy};
use crate::core::WordGraph;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Unweighted breadth-first search
///
/// FIFO frontier with words marked visited when discovered. Every edge costs
/// one substitution, so the first time the target is dequeued its path has the
/// fewest edges. This is the baseline connectivity check.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl SearchStrategy for BreadthFirst {
    fn search(&self, graph: &WordGraph<'_>, start: &str, target: &str) -> SearchOutcome {
        if !endpoints_searchable(graph, start, target) {
            return SearchOutcome::unreachable(0);
        }

        let mut queue = VecDeque::from([start.to_string()]);
        let mut visited: FxHashSet<String> = FxHashSet::default();
        let mut parents: FxHashMap<String, String> = FxHashMap::default();
        let mut expanded = 0;
        visited.insert(start.to_string());

        while let Some(word) = queue.pop_front() {
            if word == target {
                log::trace!("bfs {start} -> {target}: expanded {expanded}");
                return SearchOutcome::found(SearchPath::from_parents(&parents, word), expanded);
            }

            expanded += 1;
            for neighbor in graph.neighbors(&word) {
                if visited.insert(neighbor.clone()) {
                    parents.insert(neighbor.clone(), word.clone());
                    queue.push_back(neighbor);
                }
            }
        }

        log::trace!("bfs {start} -> {target}: unreachable after {expanded}");
        SearchOutcome::unreachable(expanded)
    }
}
