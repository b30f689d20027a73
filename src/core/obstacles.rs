//! Puzzle-scoped obstacles
//!
//! An `ObstacleSet` removes nodes (banned words) and substitutions (restricted
//! letters) from the word graph for one puzzle. It is an immutable value: the
//! generator builds a fresh one per puzzle and the session keeps its own copy.

use std::collections::BTreeSet;

/// Banned words and restricted letters for one puzzle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleSet {
    banned_words: BTreeSet<String>,
    restricted_letters: BTreeSet<char>,
}

impl ObstacleSet {
    /// No obstacles at all
    pub const NONE: Self = Self {
        banned_words: BTreeSet::new(),
        restricted_letters: BTreeSet::new(),
    };

    /// Create an obstacle set; words and letters are lowercased
    pub fn new<W, L>(banned_words: W, restricted_letters: L) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        L: IntoIterator<Item = char>,
    {
        Self {
            banned_words: banned_words
                .into_iter()
                .map(|w| w.as_ref().to_ascii_lowercase())
                .collect(),
            restricted_letters: restricted_letters
                .into_iter()
                .map(|c| c.to_ascii_lowercase())
                .collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_banned(&self, word: &str) -> bool {
        self.banned_words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn is_restricted(&self, letter: char) -> bool {
        self.restricted_letters.contains(&letter)
    }

    /// First restricted letter appearing in `word`, if any
    #[must_use]
    pub fn restricted_letter_in(&self, word: &str) -> Option<char> {
        if self.restricted_letters.is_empty() {
            return None;
        }
        word.chars().find(|&c| self.is_restricted(c))
    }

    /// Whether `word` may appear on a ladder at all
    #[must_use]
    pub fn allows(&self, word: &str) -> bool {
        !self.is_banned(word) && self.restricted_letter_in(word).is_none()
    }

    /// Banned words in sorted order
    pub fn banned_words(&self) -> impl Iterator<Item = &str> {
        self.banned_words.iter().map(String::as_str)
    }

    /// Restricted letters in sorted order
    pub fn restricted_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.restricted_letters.iter().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.banned_words.is_empty() && self.restricted_letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_empty() {
        assert!(ObstacleSet::NONE.is_empty());
        assert_eq!(ObstacleSet::NONE, ObstacleSet::default());
        assert!(ObstacleSet::NONE.allows("anything"));
    }

    #[test]
    fn banned_words_are_lowercased() {
        let obstacles = ObstacleSet::new(["COT"], []);
        assert!(obstacles.is_banned("cot"));
        assert!(!obstacles.is_banned("cat"));
        assert!(!obstacles.allows("cot"));
    }

    #[test]
    fn restricted_letter_detection() {
        let obstacles = ObstacleSet::new(Vec::<String>::new(), ['O', 'x']);
        assert!(obstacles.is_restricted('o'));
        assert!(obstacles.is_restricted('x'));
        assert_eq!(obstacles.restricted_letter_in("cog"), Some('o'));
        assert_eq!(obstacles.restricted_letter_in("cat"), None);
        assert!(!obstacles.allows("dog"));
        assert!(obstacles.allows("cat"));
    }

    #[test]
    fn listings_are_sorted() {
        let obstacles = ObstacleSet::new(["dog", "cat", "bat"], ['z', 'q']);
        assert_eq!(
            obstacles.banned_words().collect::<Vec<_>>(),
            vec!["bat", "cat", "dog"]
        );
        assert_eq!(
            obstacles.restricted_letters().collect::<Vec<_>>(),
            vec!['q', 'z']
        );
    }
}
