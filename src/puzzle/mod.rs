//! Puzzle generation
//!
//! Difficulty tiers and the bounded generator that turns a tier into a
//! verified, solvable word pair.

mod generator;
mod tier;

pub use generator::{GeneratorConfig, Puzzle, PuzzleGenerator};
pub use tier::{Difficulty, TierConfig, TierTable};
