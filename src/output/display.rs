//! Display functions for command results and game state

use super::formatters::{highlight_change, ladder_line, moves_bar, obstacle_summary};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::puzzle::Puzzle;
use crate::session::{GameStatus, Hint, SessionSnapshot};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of solving a pair
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} → {}",
        result.start.to_uppercase().bright_yellow().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for run in &result.runs {
        println!("\n{}", run.algorithm.label().bright_cyan().bold());
        match &run.path {
            Some(path) => {
                println!("  Ladder:   {}", ladder_line(path.words()));
                println!("  Steps:    {}", path.steps().to_string().green());
            }
            None => println!("  {}", "No valid path found.".red()),
        }
        println!("  Expanded: {}", run.expanded);
        println!("  Time:     {:.3}ms", run.duration.as_secs_f64() * 1000.0);
    }

    println!();
    match result.best_steps() {
        Some(steps) => println!(
            "{}",
            format!("✅ Shortest ladder: {steps} steps").green().bold()
        ),
        None => println!(
            "{}",
            format!(
                "❌ No ladder connects {} and {}",
                result.start.to_uppercase(),
                result.target.to_uppercase()
            )
            .red()
            .bold()
        ),
    }
}

/// Print generated puzzles, one block each
pub fn print_puzzles(puzzles: &[Puzzle]) {
    for (i, puzzle) in puzzles.iter().enumerate() {
        println!(
            "\n{} {} → {}  ({}, {} moves, par {})",
            format!("#{}", i + 1).bright_black(),
            puzzle.start.to_uppercase().bright_yellow().bold(),
            puzzle.target.to_uppercase().bright_yellow().bold(),
            puzzle.difficulty.to_string().cyan(),
            puzzle.max_moves,
            puzzle.par()
        );
        let banned: Vec<String> = puzzle.obstacles.banned_words().map(str::to_string).collect();
        let letters: Vec<char> = puzzle.obstacles.restricted_letters().collect();
        println!("   Obstacles: {}", obstacle_summary(&banned, &letters));
        println!("   Solution:  {}", ladder_line(puzzle.solution.words()).bright_black());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles tested:   {}", result.total_puzzles);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);
    let disagreements = result.disagreements.to_string();
    println!(
        "   Disagreements:    {}",
        if result.disagreements == 0 {
            disagreements.green()
        } else {
            disagreements.red().bold()
        }
    );

    println!("\n📈 {}", "Per algorithm:".bright_cyan().bold());
    for entry in &result.stats {
        println!(
            "   {:<14} solved {:>4}  avg expanded {:>9}  max {:>6}  time {:>8.2}ms",
            entry.algorithm.label(),
            entry.solved,
            format!("{:.1}", entry.average_expanded(result.total_puzzles)).bright_yellow(),
            entry.max_expanded,
            entry.total_time.as_secs_f64() * 1000.0
        );
    }
}

/// Write the visible state of a session
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_snapshot<W: Write>(out: &mut W, snapshot: &SessionSnapshot) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "{} → {}   [{}]",
        snapshot.current_word.to_uppercase().bright_white().bold(),
        snapshot.target_word.to_uppercase().bright_yellow().bold(),
        snapshot.difficulty
    )?;
    writeln!(out, "Ladder:    {}", ladder_line(&snapshot.path))?;
    writeln!(
        out,
        "Moves:     {}",
        moves_bar(snapshot.moves_used, snapshot.max_moves)
    )?;
    writeln!(
        out,
        "Obstacles: {}",
        obstacle_summary(&snapshot.banned_words, &snapshot.restricted_letters)
    )?;

    match snapshot.status {
        GameStatus::Playing => Ok(()),
        GameStatus::Won => writeln!(
            out,
            "\n{}",
            format!("🎉 Solved in {} moves!", snapshot.moves_used)
                .bright_green()
                .bold()
        ),
        GameStatus::Lost => writeln!(
            out,
            "\n{}",
            format!(
                "❌ Out of moves. The target was {}.",
                snapshot.target_word.to_uppercase()
            )
            .red()
            .bold()
        ),
    }
}

/// Write a hint
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_hint<W: Write>(out: &mut W, hint: &Hint) -> io::Result<()> {
    let Some(next_word) = &hint.next_word else {
        return writeln!(out, "💡 {}", hint.explanation.red());
    };

    let shown = hint.change.map_or_else(
        || next_word.to_uppercase(),
        |change| highlight_change(next_word, change.position),
    );
    writeln!(
        out,
        "💡 {} {}  ({})",
        shown.bright_yellow().bold(),
        hint.explanation,
        hint.algorithm.label().bright_black()
    )?;
    if let Some(path) = &hint.full_path {
        writeln!(out, "   Full ladder: {}", ladder_line(path.words()))?;
    }
    Ok(())
}
