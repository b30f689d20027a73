//! Dictionary of ladder words
//!
//! A `Lexicon` is built once from raw tokens and never changes afterwards.

use rustc_hash::{FxHashMap, FxHashSet};
use std::ops::RangeInclusive;

/// Normalized, deduplicated set of dictionary words
///
/// Every member is non-empty, ASCII alphabetic and lowercase. Words are also
/// indexed by length, sorted, so pools and listings come out in a stable order.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: FxHashSet<String>,
    by_length: FxHashMap<usize, Vec<String>>,
}

/// Normalize a raw token into a dictionary word
///
/// Returns `None` for empty tokens or tokens containing anything other than
/// ASCII letters. Survivors are lowercased.
///
/// # Examples
/// ```
/// use word_ladder::core::normalize;
///
/// assert_eq!(normalize("Cat").as_deref(), Some("cat"));
/// assert_eq!(normalize("can't"), None);
/// assert_eq!(normalize(""), None);
/// ```
#[must_use]
pub fn normalize(token: &str) -> Option<String> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(token.to_ascii_lowercase())
}

/// Build a lexicon from raw dictionary content
///
/// Malformed tokens are dropped silently, duplicates collapse case-insensitively.
///
/// # Examples
/// ```
/// use word_ladder::core::build_lexicon;
///
/// let lexicon = build_lexicon(["Cat", "cat", "dog", "x-ray", "42"]);
/// assert_eq!(lexicon.len(), 2);
/// assert!(lexicon.contains("cat"));
/// ```
pub fn build_lexicon<I, S>(raw_words: I) -> Lexicon
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Lexicon::new(raw_words)
}

impl Lexicon {
    /// Create a lexicon from raw tokens
    pub fn new<I, S>(raw_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: FxHashSet<String> = raw_words
            .into_iter()
            .filter_map(|token| normalize(token.as_ref()))
            .collect();

        let mut by_length: FxHashMap<usize, Vec<String>> = FxHashMap::default();
        for word in &words {
            by_length.entry(word.len()).or_default().push(word.clone());
        }
        for group in by_length.values_mut() {
            group.sort_unstable();
        }

        log::debug!(
            "lexicon built with {} words across {} lengths",
            words.len(),
            by_length.len()
        );

        Self { words, by_length }
    }

    /// Check membership of an already-normalized word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// All words of exactly `length` letters, sorted
    ///
    /// Returns an empty slice if there are none.
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.by_length.get(&length).map_or(&[][..], Vec::as_slice)
    }

    /// All words whose length falls in `lengths`, shortest first
    #[must_use]
    pub fn words_in_length_range(&self, lengths: RangeInclusive<usize>) -> Vec<&str> {
        lengths
            .flat_map(|length| self.words_of_length(length))
            .map(String::as_str)
            .collect()
    }

    /// Every word, sorted by length then alphabetically
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&str> {
        self.lengths()
            .into_iter()
            .flat_map(|length| self.words_of_length(length))
            .map(String::as_str)
            .collect()
    }

    /// Distinct word lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_letters() {
        assert_eq!(normalize("DOG").as_deref(), Some("dog"));
        assert_eq!(normalize("PlAnE").as_deref(), Some("plane"));
    }

    #[test]
    fn normalize_rejects_non_alphabetic() {
        assert_eq!(normalize("d0g"), None);
        assert_eq!(normalize("ice cream"), None);
        assert_eq!(normalize(" cat"), None);
        assert_eq!(normalize("café"), None);
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn build_filters_and_deduplicates() {
        let lexicon = build_lexicon(["Cat", "CAT", "cat", "cot", "c4t", "", "co-op"]);
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("cat"));
        assert!(lexicon.contains("cot"));
        assert!(!lexicon.contains("c4t"));
    }

    #[test]
    fn contains_is_exact_on_normalized_form() {
        let lexicon = build_lexicon(["Dog"]);
        assert!(lexicon.contains("dog"));
        assert!(!lexicon.contains("Dog"));
    }

    #[test]
    fn words_of_length_sorted() {
        let lexicon = build_lexicon(["dog", "cat", "bird", "ant", "crane"]);
        assert_eq!(lexicon.words_of_length(3), ["ant", "cat", "dog"]);
        assert_eq!(lexicon.words_of_length(4), ["bird"]);
        assert!(lexicon.words_of_length(7).is_empty());
    }

    #[test]
    fn length_range_is_shortest_first() {
        let lexicon = build_lexicon(["crane", "dog", "bird", "cat", "planet"]);
        assert_eq!(
            lexicon.words_in_length_range(3..=4),
            vec!["cat", "dog", "bird"]
        );
        assert_eq!(lexicon.words_in_length_range(6..=6), vec!["planet"]);
        assert!(lexicon.words_in_length_range(8..=9).is_empty());
    }

    #[test]
    fn sorted_words_lists_everything() {
        let lexicon: Lexicon = ["slate", "cat", "bird", "ant"].into_iter().collect();
        assert_eq!(lexicon.sorted_words(), vec!["ant", "cat", "bird", "slate"]);
    }

    #[test]
    fn lengths_ascending() {
        let lexicon = build_lexicon(["planet", "cat", "crane", "bird", "ox", "dog"]);
        assert_eq!(lexicon.lengths(), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn empty_lexicon() {
        let lexicon = build_lexicon(Vec::<String>::new());
        assert!(lexicon.is_empty());
        assert!(lexicon.lengths().is_empty());
    }
}
