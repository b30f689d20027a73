//! Priority-queue search shared by uniform-cost and A*

use super::{SearchOutcome, SearchPath};
use crate::core::WordGraph;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-priority frontier; equal priorities pop in insertion order
#[derive(Debug, Default)]
struct Frontier {
    // (priority, insertion sequence, cost so far, word)
    heap: BinaryHeap<Reverse<(usize, usize, usize, String)>>,
    pushed: usize,
}

impl Frontier {
    fn push(&mut self, priority: usize, cost: usize, word: String) {
        self.heap.push(Reverse((priority, self.pushed, cost, word)));
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<(usize, String)> {
        self.heap
            .pop()
            .map(|Reverse((_, _, cost, word))| (cost, word))
    }
}

/// Whether a search between these endpoints can succeed at all
///
/// Both endpoints must be lexicon words of equal length that the graph's
/// obstacles allow.
pub(super) fn endpoints_searchable(graph: &WordGraph<'_>, start: &str, target: &str) -> bool {
    let obstacles = graph.obstacles();
    start.len() == target.len()
        && graph.contains(start)
        && graph.contains(target)
        && obstacles.allows(start)
        && obstacles.allows(target)
}

/// Best-first search ordered by `cost + heuristic(word)`
///
/// Words are closed on first pop; a best-known-cost map drops stale queue
/// entries. With a consistent heuristic (zero included) the first time the
/// target is popped its path is shortest.
pub(super) fn best_first<H>(
    graph: &WordGraph<'_>,
    start: &str,
    target: &str,
    heuristic: H,
) -> SearchOutcome
where
    H: Fn(&str) -> usize,
{
    if !endpoints_searchable(graph, start, target) {
        return SearchOutcome::unreachable(0);
    }

    let mut frontier = Frontier::default();
    let mut best_cost: FxHashMap<String, usize> = FxHashMap::default();
    let mut parents: FxHashMap<String, String> = FxHashMap::default();
    let mut closed: FxHashSet<String> = FxHashSet::default();
    let mut expanded = 0;

    best_cost.insert(start.to_string(), 0);
    frontier.push(heuristic(start), 0, start.to_string());

    while let Some((cost, word)) = frontier.pop() {
        if closed.contains(&word) || best_cost.get(&word).is_some_and(|&best| cost > best) {
            continue;
        }

        if word == target {
            return SearchOutcome::found(SearchPath::from_parents(&parents, word), expanded);
        }

        expanded += 1;
        for neighbor in graph.neighbors(&word) {
            if closed.contains(&neighbor) {
                continue;
            }
            let tentative = cost + 1;
            if best_cost
                .get(&neighbor)
                .is_none_or(|&known| tentative < known)
            {
                best_cost.insert(neighbor.clone(), tentative);
                parents.insert(neighbor.clone(), word.clone());
                frontier.push(tentative + heuristic(&neighbor), tentative, neighbor);
            }
        }
        closed.insert(word);
    }

    SearchOutcome::unreachable(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_pops_lowest_priority_first() {
        let mut frontier = Frontier::default();
        frontier.push(3, 1, "c".to_string());
        frontier.push(1, 1, "a".to_string());
        frontier.push(2, 1, "b".to_string());

        assert_eq!(frontier.pop().unwrap().1, "a");
        assert_eq!(frontier.pop().unwrap().1, "b");
        assert_eq!(frontier.pop().unwrap().1, "c");
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn frontier_ties_keep_insertion_order() {
        let mut frontier = Frontier::default();
        frontier.push(1, 0, "zeta".to_string());
        frontier.push(1, 0, "alpha".to_string());

        assert_eq!(frontier.pop().unwrap().1, "zeta");
        assert_eq!(frontier.pop().unwrap().1, "alpha");
    }

    #[test]
    fn frontier_returns_cost() {
        let mut frontier = Frontier::default();
        frontier.push(5, 2, "word".to_string());
        assert_eq!(frontier.pop(), Some((2, "word".to_string())));
    }
}
