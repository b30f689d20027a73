//! Core domain types for word ladders
//!
//! This module holds the dictionary, the per-puzzle obstacles and the implicit
//! word graph. Everything here is read-only once built and holds no session state.

mod graph;
mod lexicon;
mod obstacles;
mod word;

pub use graph::{ALPHABET, WordGraph};
pub use lexicon::{Lexicon, build_lexicon, normalize};
pub use obstacles::ObstacleSet;
pub use word::{LetterChange, hamming_distance, letter_change};
