//! Word list loading utilities
//!
//! Reads raw dictionary content from files or slices. Filtering and
//! normalization are left to the lexicon.

use crate::core::{Lexicon, build_lexicon};
use std::fs;
use std::io;
use std::path::Path;

/// Load a lexicon from a whitespace-separated word file
///
/// Tokens that are not plain words are skipped by the lexicon.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let lexicon = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Lexicon> {
    let content = fs::read_to_string(path)?;
    Ok(lexicon_from_str(&content))
}

/// Build a lexicon from text holding one or more words per line
#[must_use]
pub fn lexicon_from_str(content: &str) -> Lexicon {
    build_lexicon(content.split_whitespace())
}

/// Build a lexicon from an embedded string slice
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::lexicon_from_slice;
///
/// let lexicon = lexicon_from_slice(&["cat", "cot", "c@t"]);
/// assert_eq!(lexicon.len(), 2);
/// ```
#[must_use]
pub fn lexicon_from_slice(slice: &[&str]) -> Lexicon {
    build_lexicon(slice)
}
