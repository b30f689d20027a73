//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod simple;
pub mod solve;

pub use benchmark::{AlgorithmStats, BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use generate::generate_puzzles;
pub use simple::{play_lines, run_simple};
pub use solve::{SolveConfig, SolveResult, SolveRun, solve_ladder};
