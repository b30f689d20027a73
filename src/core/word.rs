//! Word comparison helpers
//!
//! Ladder words are ASCII lowercase, so positions are byte offsets.

use std::fmt;

/// A single-letter substitution between two words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterChange {
    /// Zero-based position of the changed letter
    pub position: usize,
    pub from: char,
    pub to: char,
}

impl fmt::Display for LetterChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Change letter {} from '{}' to '{}'.",
            self.position + 1,
            self.from,
            self.to
        )
    }
}

/// Number of positions at which two equal-length words differ
///
/// For words of different length the extra letters count as differences.
///
/// # Examples
/// ```
/// use word_ladder::core::hamming_distance;
///
/// assert_eq!(hamming_distance("cat", "dog"), 3);
/// assert_eq!(hamming_distance("cold", "cord"), 1);
/// assert_eq!(hamming_distance("same", "same"), 0);
/// ```
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> usize {
    let differing = a
        .bytes()
        .zip(b.bytes())
        .filter(|(x, y)| x != y)
        .count();
    differing + a.len().abs_diff(b.len())
}

/// The substitution turning `from` into `to`, if they differ in exactly one position
///
/// # Examples
/// ```
/// use word_ladder::core::letter_change;
///
/// let change = letter_change("cat", "cot").unwrap();
/// assert_eq!((change.position, change.from, change.to), (1, 'a', 'o'));
/// assert!(letter_change("cat", "dog").is_none());
/// ```
#[must_use]
pub fn letter_change(from: &str, to: &str) -> Option<LetterChange> {
    if from.len() != to.len() {
        return None;
    }

    let mut differences = from
        .bytes()
        .zip(to.bytes())
        .enumerate()
        .filter(|(_, (a, b))| a != b);

    let (position, (a, b)) = differences.next()?;
    if differences.next().is_some() {
        return None;
    }

    Some(LetterChange {
        position,
        from: char::from(a),
        to: char::from(b),
    })
}
