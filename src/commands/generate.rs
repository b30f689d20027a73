//! Puzzle generation command

use crate::error::Result;
use crate::puzzle::{Difficulty, Puzzle, PuzzleGenerator};
use rand::Rng;

/// Generate `count` puzzles for one tier
///
/// # Errors
///
/// Stops at the first `GenerationFailure`.
pub fn generate_puzzles<R: Rng + ?Sized>(
    generator: &PuzzleGenerator<'_>,
    difficulty: Difficulty,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Puzzle>> {
    (0..count)
        .map(|_| generator.generate(difficulty, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordGraph;
    use crate::search::{Algorithm, SearchStrategy};
    use crate::wordlists::default_lexicon;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generates_requested_count() {
        let lexicon = default_lexicon();
        let generator = PuzzleGenerator::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(11);

        let puzzles = generate_puzzles(&generator, Difficulty::Advanced, 5, &mut rng).unwrap();
        assert_eq!(puzzles.len(), 5);
        for puzzle in &puzzles {
            assert_eq!(puzzle.difficulty, Difficulty::Advanced);
            assert_eq!(puzzle.max_moves, 7);
            assert!((4..=5).contains(&puzzle.start.len()));
            assert_eq!(puzzle.start.len(), puzzle.target.len());
        }
    }

    #[test]
    fn puzzles_solvable_under_own_obstacles() {
        let lexicon = default_lexicon();
        let generator = PuzzleGenerator::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(3);

        for puzzle in generate_puzzles(&generator, Difficulty::Challenge, 4, &mut rng).unwrap() {
            let graph = WordGraph::new(&lexicon, &puzzle.obstacles);
            let path = Algorithm::Bfs
                .find_path(&graph, &puzzle.start, &puzzle.target)
                .unwrap();
            assert_eq!(path.steps(), puzzle.par());
        }
    }

    #[test]
    fn zero_count_is_empty() {
        let lexicon = default_lexicon();
        let generator = PuzzleGenerator::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(
            generate_puzzles(&generator, Difficulty::Beginner, 0, &mut rng)
                .unwrap()
                .is_empty()
        );
    }
}
