//! Word Ladder
//!
//! Solves single-letter-substitution word puzzles: finds shortest ladders between
//! two words, generates solvable puzzles per difficulty tier and runs hinted play.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::build_lexicon;
//! use word_ladder::search::{Algorithm, SearchStrategy};
//! use word_ladder::core::{ObstacleSet, WordGraph};
//!
//! let lexicon = build_lexicon(["cat", "cot", "cog", "dog"]);
//! let obstacles = ObstacleSet::default();
//! let graph = WordGraph::new(&lexicon, &obstacles);
//!
//! let path = Algorithm::AStar.find_path(&graph, "cat", "dog").unwrap();
//! assert_eq!(path.words(), ["cat", "cot", "cog", "dog"]);
//! ```

// Error taxonomy shared by every layer
pub mod error;

// Core domain types: lexicon, obstacles, neighbor generation
pub mod core;

// Path search algorithms
pub mod search;

// Puzzle generation per difficulty tier
pub mod puzzle;

// Interactive session state machine
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{LadderError, MoveRejection, Result};
