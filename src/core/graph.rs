//! Implicit word graph
//!
//! Nodes are lexicon words; an edge joins two words of equal length that differ
//! in exactly one position. Edges are computed on demand and never stored.

use super::{Lexicon, ObstacleSet};

/// Letters tried at each position when generating neighbors
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// View of the word graph under one puzzle's obstacles
#[derive(Debug, Clone, Copy)]
pub struct WordGraph<'a> {
    lexicon: &'a Lexicon,
    obstacles: &'a ObstacleSet,
}

static NO_OBSTACLES: ObstacleSet = ObstacleSet::NONE;

impl<'a> WordGraph<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon, obstacles: &'a ObstacleSet) -> Self {
        Self { lexicon, obstacles }
    }

    /// Graph without any obstacles
    #[must_use]
    pub fn unrestricted(lexicon: &'a Lexicon) -> Self {
        Self::new(lexicon, &NO_OBSTACLES)
    }

    #[inline]
    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    #[inline]
    #[must_use]
    pub const fn obstacles(&self) -> &'a ObstacleSet {
        self.obstacles
    }

    /// Whether `word` is a node of the graph
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    /// All words one substitution away from `word`
    ///
    /// Tries every position with every unrestricted letter and keeps results
    /// that are in the lexicon, differ from `word` and pass the obstacles. A
    /// restricted letter kept from `word` rules the candidate out too. Each
    /// (position, letter) pair yields a distinct word, so the result has no
    /// duplicates. Order is by position, then alphabetical.
    #[must_use]
    pub fn neighbors(&self, word: &str) -> Vec<String> {
        let mut candidate = word.as_bytes().to_vec();
        let mut found = Vec::new();

        for position in 0..candidate.len() {
            let original = candidate[position];
            for &letter in ALPHABET {
                if letter == original || self.obstacles.is_restricted(char::from(letter)) {
                    continue;
                }
                candidate[position] = letter;
                // Non-ASCII input can turn into invalid UTF-8 here; it is never a word
                if let Ok(text) = std::str::from_utf8(&candidate)
                    && self.lexicon.contains(text)
                    && self.obstacles.allows(text)
                {
                    found.push(text.to_string());
                }
            }
            candidate[position] = original;
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{build_lexicon, hamming_distance};

    fn sample_lexicon() -> Lexicon {
        build_lexicon([
            "cat", "cot", "cog", "dog", "dot", "hat", "hot", "bat", "cats", "coat",
        ])
    }

    #[test]
    fn neighbors_one_substitution_apart() {
        let lexicon = sample_lexicon();
        let graph = WordGraph::unrestricted(&lexicon);

        let neighbors = graph.neighbors("cat");
        assert_eq!(neighbors, vec!["bat", "hat", "cot"]);
    }

    #[test]
    fn neighbors_exclude_self_and_other_lengths() {
        let lexicon = sample_lexicon();
        let graph = WordGraph::unrestricted(&lexicon);

        for word in lexicon.sorted_words() {
            for neighbor in graph.neighbors(word) {
                assert_ne!(neighbor, word);
                assert_eq!(neighbor.len(), word.len());
                assert_eq!(hamming_distance(word, &neighbor), 1);
                assert!(lexicon.contains(&neighbor));
            }
        }
    }

    #[test]
    fn neighbors_skip_banned_words() {
        let lexicon = sample_lexicon();
        let obstacles = ObstacleSet::new(["cot"], []);
        let graph = WordGraph::new(&lexicon, &obstacles);

        assert_eq!(graph.neighbors("cat"), vec!["bat", "hat"]);
    }

    #[test]
    fn neighbors_skip_restricted_letters() {
        let lexicon = sample_lexicon();
        let obstacles = ObstacleSet::new(Vec::<String>::new(), ['h', 'o']);
        let graph = WordGraph::new(&lexicon, &obstacles);

        assert_eq!(graph.neighbors("cat"), vec!["bat"]);
    }

    #[test]
    fn neighbors_drop_restricted_letters_kept_from_source() {
        let lexicon = build_lexicon(["worm", "word", "cord", "form"]);
        let obstacles = ObstacleSet::new(Vec::<String>::new(), ['w']);
        let graph = WordGraph::new(&lexicon, &obstacles);

        // worm -> word keeps the 'w'; only worm -> form replaces it
        assert_eq!(graph.neighbors("worm"), vec!["form"]);
        assert!(graph.neighbors("word").iter().all(|w| obstacles.allows(w)));
        assert_eq!(graph.neighbors("word"), vec!["cord"]);
    }

    #[test]
    fn neighbors_of_unknown_word() {
        let lexicon = sample_lexicon();
        let graph = WordGraph::unrestricted(&lexicon);

        // Unknown words still get neighbors computed from substitution
        assert_eq!(graph.neighbors("cet"), vec!["cat", "cot"]);
        assert!(graph.neighbors("").is_empty());
    }

    #[test]
    fn isolated_word_has_no_neighbors() {
        let lexicon = build_lexicon(["zebra", "cat"]);
        let graph = WordGraph::unrestricted(&lexicon);
        assert!(graph.neighbors("zebra").is_empty());
    }
}
