//! Search results

use crate::core::letter_change;
use rustc_hash::FxHashMap;
use std::fmt;

/// Ordered ladder from a start word to a target word
///
/// Always holds at least one word. A one-word path means start and target coincide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    words: Vec<String>,
}

impl SearchPath {
    /// Wrap an explicit word sequence; `None` if it is empty
    #[must_use]
    pub fn from_words(words: Vec<String>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// Walk parent links back from `end` to the root of the search
    pub(super) fn from_parents(parents: &FxHashMap<String, String>, end: String) -> Self {
        let mut words = vec![end];
        while let Some(parent) = words.last().and_then(|w| parents.get(w)) {
            words.push(parent.clone());
        }
        words.reverse();
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    #[must_use]
    pub fn start(&self) -> &str {
        &self.words[0]
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.words[self.words.len() - 1]
    }

    /// Number of words, endpoints included
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // never empty
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Number of substitutions needed to walk the path
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len() - 1
    }

    /// The word after the start, if the path has a move at all
    #[must_use]
    pub fn next_word(&self) -> Option<&str> {
        self.words.get(1).map(String::as_str)
    }

    /// Every consecutive pair differs by exactly one substitution
    #[must_use]
    pub fn is_valid_ladder(&self) -> bool {
        self.words
            .windows(2)
            .all(|pair| letter_change(&pair[0], &pair[1]).is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" → "))
    }
}

/// Result of one search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Shortest ladder, or `None` if the target is unreachable
    pub path: Option<SearchPath>,
    /// Number of words whose neighbors were generated
    pub expanded: usize,
}

impl SearchOutcome {
    pub(super) const fn found(path: SearchPath, expanded: usize) -> Self {
        Self {
            path: Some(path),
            expanded,
        }
    }

    pub(super) const fn unreachable(expanded: usize) -> Self {
        Self {
            path: None,
            expanded,
        }
    }
}
