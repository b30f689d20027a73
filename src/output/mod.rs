//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_puzzles, print_solve_result, write_hint, write_snapshot,
};
