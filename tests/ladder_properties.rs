// Property checks over the public search API
// Every pair of a small hand-built lexicon is exercised exhaustively

use rand::SeedableRng;
use rand::rngs::StdRng;
use word_ladder::core::{Lexicon, ObstacleSet, WordGraph, build_lexicon, hamming_distance};
use word_ladder::puzzle::{Difficulty, PuzzleGenerator};
use word_ladder::search::{Algorithm, SearchStrategy};
use word_ladder::wordlists::default_lexicon;

fn small_lexicon() -> Lexicon {
    build_lexicon([
        "cat", "cot", "cog", "dog", "dot", "hot", "hat", "hit", "sit", "sat", "cut", "ink", "cold",
        "cord", "card", "ward", "warm", "word", "worm", "wore",
    ])
}

fn all_pairs(lexicon: &Lexicon) -> Vec<(&str, &str)> {
    let words = lexicon.sorted_words();
    words
        .iter()
        .flat_map(|&a| words.iter().map(move |&b| (a, b)))
        .filter(|(a, b)| a.len() == b.len())
        .collect()
}

#[test]
fn neighbors_are_one_substitution_lexicon_words() {
    let lexicon = small_lexicon();
    let obstacles = ObstacleSet::new(["cot"], ['w']);
    let graph = WordGraph::new(&lexicon, &obstacles);

    for word in lexicon.sorted_words() {
        for neighbor in graph.neighbors(word) {
            assert!(lexicon.contains(&neighbor));
            assert_eq!(neighbor.len(), word.len());
            assert_eq!(hamming_distance(word, &neighbor), 1, "{word} -> {neighbor}");
            assert!(obstacles.allows(&neighbor), "{neighbor} breaks an obstacle");
        }
    }
}

#[test]
fn neighbors_complete_without_obstacles() {
    let lexicon = small_lexicon();
    let graph = WordGraph::unrestricted(&lexicon);

    for word in lexicon.sorted_words() {
        let mut expected: Vec<&str> = lexicon
            .words_of_length(word.len())
            .iter()
            .map(String::as_str)
            .filter(|other| hamming_distance(word, other) == 1)
            .collect();
        let mut found = graph.neighbors(word);
        expected.sort_unstable();
        found.sort_unstable();
        assert_eq!(found, expected, "neighbors of {word}");
    }
}

#[test]
fn algorithms_agree_on_every_pair() {
    let lexicon = small_lexicon();
    let graph = WordGraph::unrestricted(&lexicon);

    for (start, target) in all_pairs(&lexicon) {
        let lengths: Vec<Option<usize>> = Algorithm::ALL
            .iter()
            .map(|algorithm| {
                algorithm
                    .find_path(&graph, start, target)
                    .map(|path| path.len())
            })
            .collect();
        assert!(
            lengths.windows(2).all(|pair| pair[0] == pair[1]),
            "{start} -> {target}: {lengths:?}"
        );
    }
}

#[test]
fn returned_paths_are_valid_ladders() {
    let lexicon = small_lexicon();
    let graph = WordGraph::unrestricted(&lexicon);

    for (start, target) in all_pairs(&lexicon) {
        if let Some(path) = Algorithm::AStar.find_path(&graph, start, target) {
            assert_eq!(path.start(), start);
            assert_eq!(path.target(), target);
            for pair in path.words().windows(2) {
                assert_eq!(hamming_distance(&pair[0], &pair[1]), 1);
            }
        }
    }
}

#[test]
fn classic_example_has_four_words() {
    let lexicon = build_lexicon(["cat", "cot", "cog", "dog"]);
    let graph = WordGraph::unrestricted(&lexicon);

    for algorithm in Algorithm::ALL {
        let path = algorithm.find_path(&graph, "cat", "dog").unwrap();
        assert_eq!(path.words(), ["cat", "cot", "cog", "dog"], "{algorithm}");
    }
}

#[test]
fn disconnected_and_degenerate_pairs() {
    let lexicon = small_lexicon();
    let graph = WordGraph::unrestricted(&lexicon);

    for algorithm in Algorithm::ALL {
        assert!(algorithm.find_path(&graph, "cat", "ink").is_none());
        assert!(algorithm.find_path(&graph, "cat", "cold").is_none());
        assert!(algorithm.find_path(&graph, "cat", "zzz").is_none());

        let same = algorithm.find_path(&graph, "cat", "cat").unwrap();
        assert_eq!(same.words(), ["cat"]);
    }
}

#[test]
fn obstacles_hold_for_every_search_result() {
    let lexicon = small_lexicon();
    let obstacles = ObstacleSet::new(["cot", "word"], ['h']);
    let graph = WordGraph::new(&lexicon, &obstacles);

    for (start, target) in all_pairs(&lexicon) {
        if !obstacles.allows(start) || !obstacles.allows(target) {
            continue;
        }
        for algorithm in Algorithm::ALL {
            if let Some(path) = algorithm.find_path(&graph, start, target) {
                for word in path.iter() {
                    assert!(obstacles.allows(word), "{algorithm} returned {word}");
                }
            }
        }
    }
}

#[test]
fn obstacle_endpoints_yield_no_ladder() {
    let lexicon = small_lexicon();
    let obstacles = ObstacleSet::new(["worm"], ['h']);
    let graph = WordGraph::new(&lexicon, &obstacles);

    for algorithm in Algorithm::ALL {
        assert!(algorithm.find_path(&graph, "worm", "word").is_none());
        assert!(algorithm.find_path(&graph, "word", "worm").is_none());
        assert!(algorithm.find_path(&graph, "hat", "cat").is_none());
        assert!(algorithm.find_path(&graph, "cat", "hat").is_none());
        assert!(algorithm.find_path(&graph, "word", "cord").is_some());
    }
}

#[test]
fn generated_pairs_are_connected() {
    let lexicon = default_lexicon();
    let generator = PuzzleGenerator::new(&lexicon);
    let mut rng = StdRng::seed_from_u64(2024);

    for difficulty in Difficulty::ALL {
        for _ in 0..10 {
            let (start, target) = generator.generate_pair(difficulty, &mut rng).unwrap();
            let graph = WordGraph::unrestricted(&lexicon);
            assert!(Algorithm::Bfs.find_path(&graph, &start, &target).is_some());
        }
    }
}

#[test]
fn challenge_puzzles_respect_their_obstacles() {
    let lexicon = default_lexicon();
    let generator = PuzzleGenerator::new(&lexicon);
    let mut rng = StdRng::seed_from_u64(77);

    for _ in 0..10 {
        let puzzle = generator.generate(Difficulty::Challenge, &mut rng).unwrap();
        let graph = WordGraph::new(&lexicon, &puzzle.obstacles);

        for algorithm in Algorithm::ALL {
            let path = algorithm
                .find_path(&graph, &puzzle.start, &puzzle.target)
                .unwrap();
            assert_eq!(path.steps(), puzzle.par());
            for word in path.iter() {
                assert!(!puzzle.obstacles.is_banned(word));
                assert!(puzzle.obstacles.restricted_letter_in(word).is_none());
            }
        }
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let lexicon = default_lexicon();
    let generator = PuzzleGenerator::new(&lexicon);

    let draw = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        Difficulty::ALL.map(|difficulty| generator.generate(difficulty, &mut rng).unwrap())
    };

    assert_eq!(draw(42), draw(42));
}
