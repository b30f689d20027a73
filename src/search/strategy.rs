//! Search strategies
//!
//! Defines the `SearchStrategy` trait and the closed set of algorithms.

use super::{AStar, BreadthFirst, SearchOutcome, SearchPath, UniformCost};
use crate::core::WordGraph;
use crate::error::LadderError;
use std::fmt;
use std::str::FromStr;

/// A way of finding a shortest ladder between two words
pub trait SearchStrategy {
    /// Search from `start` to `target`, reporting the path and the work done
    fn search(&self, graph: &WordGraph<'_>, start: &str, target: &str) -> SearchOutcome;

    /// Shortest ladder, or `None` when the words are not connected
    fn find_path(&self, graph: &WordGraph<'_>, start: &str, target: &str) -> Option<SearchPath> {
        self.search(graph, start, target).path
    }
}

/// Runtime choice among the available strategies
///
/// Resolved once at the API boundary from its name; dispatch stays static.
///
/// # Examples
/// ```
/// use word_ladder::search::Algorithm;
///
/// let algorithm: Algorithm = "ucs".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::Ucs);
/// assert!("dfs".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Breadth-first search
    Bfs,
    /// Uniform-cost search
    Ucs,
    /// A* with Hamming-distance heuristic (default)
    #[default]
    AStar,
}

impl Algorithm {
    /// Every algorithm, in presentation order
    pub const ALL: [Self; 3] = [Self::Bfs, Self::Ucs, Self::AStar];

    /// Resolve an algorithm from its name
    ///
    /// Supported names: "bfs", "ucs", "`a_star`"
    ///
    /// # Errors
    /// Returns `LadderError::InvalidArgument` for any other name.
    pub fn from_name(name: &str) -> Result<Self, LadderError> {
        match name {
            "bfs" => Ok(Self::Bfs),
            "ucs" => Ok(Self::Ucs),
            "a_star" => Ok(Self::AStar),
            other => Err(LadderError::invalid_argument(format!(
                "unknown algorithm '{other}' (expected bfs, ucs or a_star)"
            ))),
        }
    }

    /// Canonical name accepted by `from_name`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Ucs => "ucs",
            Self::AStar => "a_star",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "Breadth-first",
            Self::Ucs => "Uniform-cost",
            Self::AStar => "A*",
        }
    }

    /// The algorithm after this one, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Bfs => Self::Ucs,
            Self::Ucs => Self::AStar,
            Self::AStar => Self::Bfs,
        }
    }
}

impl SearchStrategy for Algorithm {
    fn search(&self, graph: &WordGraph<'_>, start: &str, target: &str) -> SearchOutcome {
        match self {
            Self::Bfs => BreadthFirst.search(graph, start, target),
            Self::Ucs => UniformCost.search(graph, start, target),
            Self::AStar => AStar.search(graph, start, target),
        }
    }
}

impl FromStr for Algorithm {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
