//! Benchmark command
//!
//! Generates puzzles and races every search algorithm over them. Puzzles are
//! searched in parallel; the lexicon is shared read-only across threads.

use crate::core::WordGraph;
use crate::error::Result;
use crate::puzzle::{Difficulty, Puzzle, PuzzleGenerator};
use crate::search::{Algorithm, SearchStrategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// What to benchmark
pub struct BenchmarkConfig {
    pub count: usize,
    /// Fixed tier, or `None` to cycle through all three
    pub difficulty: Option<Difficulty>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            difficulty: None,
            show_progress: true,
        }
    }

    fn difficulty_for(&self, index: usize) -> Difficulty {
        self.difficulty
            .unwrap_or(Difficulty::ALL[index % Difficulty::ALL.len()])
    }
}

/// Aggregate numbers for one algorithm
#[derive(Debug, Clone)]
pub struct AlgorithmStats {
    pub algorithm: Algorithm,
    pub solved: usize,
    pub total_steps: usize,
    pub total_expanded: usize,
    pub max_expanded: usize,
    pub total_time: Duration,
}

impl AlgorithmStats {
    const fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            solved: 0,
            total_steps: 0,
            total_expanded: 0,
            max_expanded: 0,
            total_time: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn average_expanded(&self, puzzles: usize) -> f64 {
        if puzzles == 0 {
            0.0
        } else {
            self.total_expanded as f64 / puzzles as f64
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub stats: Vec<AlgorithmStats>,
    /// Puzzles on which the algorithms reported different ladder lengths
    pub disagreements: usize,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

struct Run {
    algorithm: Algorithm,
    steps: Option<usize>,
    expanded: usize,
    duration: Duration,
}

/// Generate puzzles and search each with every algorithm
///
/// # Errors
///
/// Returns the generator's error if a tier cannot produce a puzzle.
pub fn run_benchmark<R: Rng + ?Sized>(
    generator: &PuzzleGenerator<'_>,
    config: &BenchmarkConfig,
    rng: &mut R,
) -> Result<BenchmarkResult> {
    let puzzles = (0..config.count)
        .map(|i| generator.generate(config.difficulty_for(i), rng))
        .collect::<Result<Vec<Puzzle>>>()?;

    let pb = if config.show_progress {
        ProgressBar::new(puzzles.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("searching");

    let start = Instant::now();
    let lexicon = generator.lexicon();
    let per_puzzle: Vec<Vec<Run>> = puzzles
        .par_iter()
        .map(|puzzle| {
            let graph = WordGraph::new(lexicon, &puzzle.obstacles);
            let runs = Algorithm::ALL
                .iter()
                .map(|&algorithm| {
                    let timer = Instant::now();
                    let outcome = algorithm.search(&graph, &puzzle.start, &puzzle.target);
                    Run {
                        algorithm,
                        steps: outcome.path.as_ref().map(|path| path.steps()),
                        expanded: outcome.expanded,
                        duration: timer.elapsed(),
                    }
                })
                .collect();
            pb.inc(1);
            runs
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let mut stats: Vec<AlgorithmStats> = Algorithm::ALL.map(AlgorithmStats::new).to_vec();
    let mut disagreements = 0;
    for runs in &per_puzzle {
        if runs.windows(2).any(|pair| pair[0].steps != pair[1].steps) {
            log::debug!("algorithms disagree on ladder length");
            disagreements += 1;
        }
        for (entry, run) in stats.iter_mut().zip(runs) {
            debug_assert_eq!(entry.algorithm, run.algorithm);
            if let Some(steps) = run.steps {
                entry.solved += 1;
                entry.total_steps += steps;
            }
            entry.total_expanded += run.expanded;
            entry.max_expanded = entry.max_expanded.max(run.expanded);
            entry.total_time += run.duration;
        }
    }

    let total_puzzles = puzzles.len();
    Ok(BenchmarkResult {
        total_puzzles,
        stats,
        disagreements,
        duration,
        puzzles_per_second: total_puzzles as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::default_lexicon;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn quiet(count: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            show_progress: false,
            ..BenchmarkConfig::new(count)
        }
    }

    #[test]
    fn benchmark_runs() {
        let lexicon = default_lexicon();
        let generator = PuzzleGenerator::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(5);

        let result = run_benchmark(&generator, &quiet(6), &mut rng).unwrap();

        assert_eq!(result.total_puzzles, 6);
        assert_eq!(result.stats.len(), 3);
        for entry in &result.stats {
            assert_eq!(entry.solved, 6, "{}", entry.algorithm);
            assert!(entry.total_expanded >= entry.max_expanded);
        }
    }

    #[test]
    fn algorithms_agree_on_lengths() {
        let lexicon = default_lexicon();
        let generator = PuzzleGenerator::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(21);

        let result = run_benchmark(&generator, &quiet(9), &mut rng).unwrap();

        assert_eq!(result.disagreements, 0);
        let steps: Vec<usize> = result.stats.iter().map(|s| s.total_steps).collect();
        assert!(steps.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn astar_expands_no_more_than_ucs() {
        let lexicon = default_lexicon();
        let generator = PuzzleGenerator::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(8);
        let config = BenchmarkConfig {
            difficulty: Some(Difficulty::Advanced),
            ..quiet(5)
        };

        let result = run_benchmark(&generator, &config, &mut rng).unwrap();
        let expanded = |algorithm| {
            result
                .stats
                .iter()
                .find(|s| s.algorithm == algorithm)
                .map(|s| s.total_expanded)
                .unwrap()
        };

        assert!(expanded(Algorithm::AStar) <= expanded(Algorithm::Ucs));
    }

    #[test]
    fn empty_benchmark() {
        let lexicon = default_lexicon();
        let generator = PuzzleGenerator::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(0);

        let result = run_benchmark(&generator, &quiet(0), &mut rng).unwrap();
        assert_eq!(result.total_puzzles, 0);
        assert_eq!(result.disagreements, 0);
        assert_eq!(result.stats[0].average_expanded(0), 0.0);
    }
}
