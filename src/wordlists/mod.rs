//! Word lists for ladder puzzles
//!
//! Provides the embedded default dictionary and loaders for custom ones.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

use crate::core::{Lexicon, build_lexicon};

/// Lexicon built from the embedded default dictionary
#[must_use]
pub fn default_lexicon() -> Lexicon {
    build_lexicon(DEFAULT_WORDS)
}
