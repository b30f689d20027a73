//! Word Ladder - CLI
//!
//! Play, solve and generate single-letter-substitution word ladders with
//! breadth-first, uniform-cost and A* search.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use word_ladder::{
    commands::{
        BenchmarkConfig, SolveConfig, generate_puzzles, run_benchmark, run_simple, solve_ladder,
    },
    core::Lexicon,
    output::{print_benchmark_result, print_puzzles, print_solve_result},
    puzzle::{Difficulty, PuzzleGenerator},
    search::Algorithm,
    session::{Game, StartRequest},
    wordlists::{default_lexicon, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder puzzles: change one letter at a time to reach the target",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'default' (embedded dictionary) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Seed for reproducible puzzle generation
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Search algorithm for hints and solving: bfs, ucs, a_star
    #[arg(short, long, global = true, default_value = "a_star")]
    algorithm: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Tier to start with: beginner, advanced, challenge
        #[arg(short, long, default_value = "beginner")]
        tier: String,
    },

    /// Simple CLI mode (line-based play without TUI)
    Simple {
        /// Tier to start with: beginner, advanced, challenge
        #[arg(short, long, default_value = "beginner")]
        tier: String,

        /// Play a specific pair instead of a generated puzzle
        #[arg(long, num_args = 2, value_names = ["START", "TARGET"])]
        custom: Option<Vec<String>>,
    },

    /// Find the shortest ladder between two words
    Solve {
        start: String,
        target: String,

        /// Run every algorithm and compare them
        #[arg(long)]
        all: bool,
    },

    /// Print generated puzzles for a tier
    Generate {
        /// Tier: beginner, advanced, challenge
        #[arg(short, long, default_value = "beginner")]
        tier: String,

        /// Number of puzzles
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Race all algorithms over generated puzzles
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Restrict to one tier (default: cycle through all)
        #[arg(short, long)]
        tier: Option<String>,
    },
}

/// Load the lexicon selected by the -w flag
fn load_lexicon(wordlist: &str) -> Result<Lexicon> {
    let lexicon = match wordlist {
        "default" => default_lexicon(),
        path => load_from_file(path).with_context(|| format!("reading word list '{path}'"))?,
    };
    log::debug!("loaded {} words", lexicon.len());
    Ok(lexicon)
}

fn parse_tier(name: &str) -> Result<Difficulty> {
    Ok(Difficulty::from_name(&name.to_uppercase())?)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn make_game(lexicon: &Lexicon, seed: Option<u64>, algorithm: Algorithm) -> Game<'_> {
    let mut game = seed.map_or_else(
        || Game::new(lexicon),
        |seed| Game::with_seed(lexicon, seed),
    );
    game.set_algorithm(algorithm);
    game
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let lexicon = load_lexicon(&cli.wordlist)?;
    let algorithm = Algorithm::from_name(&cli.algorithm)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        tier: "beginner".to_string(),
    });

    match command {
        Commands::Play { tier } => {
            use word_ladder::interactive::{App, run_tui};

            let difficulty = parse_tier(&tier)?;
            let app = App::new(make_game(&lexicon, cli.seed, algorithm));
            run_tui(app, StartRequest::Tier(difficulty))
        }
        Commands::Simple { tier, custom } => {
            let request = match custom.as_deref() {
                Some([start, target]) => StartRequest::Custom {
                    start: start.clone(),
                    target: target.clone(),
                },
                _ => StartRequest::Tier(parse_tier(&tier)?),
            };
            let mut game = make_game(&lexicon, cli.seed, algorithm);
            run_simple(&mut game, request)
        }
        Commands::Solve { start, target, all } => {
            let config = SolveConfig::new(start, target);
            let config = if all {
                config
            } else {
                config.with_algorithm(algorithm)
            };
            let result = solve_ladder(config, &lexicon)?;
            print_solve_result(&result);
            Ok(())
        }
        Commands::Generate { tier, count } => {
            let difficulty = parse_tier(&tier)?;
            let generator = PuzzleGenerator::new(&lexicon);
            let mut rng = make_rng(cli.seed);
            let puzzles = generate_puzzles(&generator, difficulty, count, &mut rng)?;
            print_puzzles(&puzzles);
            Ok(())
        }
        Commands::Benchmark { count, tier } => {
            let difficulty = tier.as_deref().map(parse_tier).transpose()?;
            println!("Running benchmark on {count} generated puzzles...");

            let generator = PuzzleGenerator::new(&lexicon);
            let mut rng = make_rng(cli.seed);
            let config = BenchmarkConfig {
                difficulty,
                ..BenchmarkConfig::new(count)
            };
            let result = run_benchmark(&generator, &config, &mut rng)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
