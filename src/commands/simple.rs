//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Each line is either a command or the next
//! word of the ladder.

use crate::output::formatters::ladder_line;
use crate::output::{write_hint, write_snapshot};
use crate::puzzle::Difficulty;
use crate::session::{Game, HintDetail, StartRequest};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Help,
    Hint(&'a str),
    Algorithm(&'a str),
    New(Option<&'a str>),
    Custom(&'a str, &'a str),
    History,
    Move(&'a str),
    Unknown,
}

fn parse_command(line: &str) -> Command<'_> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        ["quit" | "q" | "exit"] => Command::Quit,
        ["help"] => Command::Help,
        ["hint"] => Command::Hint("basic"),
        ["hint", detail] => Command::Hint(*detail),
        ["algo", name] => Command::Algorithm(*name),
        ["new"] => Command::New(None),
        ["new", tier] => Command::New(Some(*tier)),
        ["custom", start, target] => Command::Custom(*start, *target),
        ["history"] => Command::History,
        [word] => Command::Move(*word),
        _ => Command::Unknown,
    }
}

const HELP: &str = "Commands: <word> to move, 'hint', 'hint full', 'algo <bfs|ucs|a_star>',
          'new [beginner|advanced|challenge]', 'custom <start> <target>',
          'history', 'quit'";

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if the first puzzle cannot be started or on an I/O error.
pub fn run_simple<G: Rng>(game: &mut Game<'_, G>, request: StartRequest) -> Result<()> {
    let stdin = io::stdin();
    play_lines(game, request, stdin.lock(), io::stdout())
}

/// Play over any line source and sink
///
/// Ends on `quit` or at end of input. Rejected moves and bad commands are
/// reported and play continues.
///
/// # Errors
///
/// Returns an error if the first puzzle cannot be started or on an I/O error.
pub fn play_lines<G, I, O>(
    game: &mut Game<'_, G>,
    request: StartRequest,
    input: I,
    mut out: O,
) -> Result<()>
where
    G: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Ladder - Interactive Mode               ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Change one letter per move to reach the target word.")?;
    writeln!(out, "{HELP}\n")?;

    let snapshot = game.start(request)?;
    let mut difficulty = snapshot.difficulty;
    write_snapshot(&mut out, &snapshot)?;
    prompt(&mut out)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            prompt(&mut out)?;
            continue;
        }

        match parse_command(line) {
            Command::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Hint(detail) => {
                match HintDetail::from_name(detail).and_then(|detail| game.get_hint(detail)) {
                    Ok(hint) => write_hint(&mut out, &hint)?,
                    Err(err) => report(&mut out, err)?,
                }
            }
            Command::Algorithm(name) => match game.set_hint_algorithm(name) {
                Ok(()) => writeln!(
                    out,
                    "✓ Hints now use {}",
                    game.hint_algorithm().label().bright_cyan()
                )?,
                Err(err) => report(&mut out, err)?,
            },
            Command::New(tier) => {
                let next = tier.map_or(Ok(difficulty), |name| {
                    Difficulty::from_name(&name.to_uppercase())
                });
                match next.and_then(|d| game.start(StartRequest::Tier(d))) {
                    Ok(snapshot) => {
                        difficulty = snapshot.difficulty;
                        writeln!(out, "\n🔄 New game started!\n")?;
                        write_snapshot(&mut out, &snapshot)?;
                    }
                    Err(err) => report(&mut out, err)?,
                }
            }
            Command::Custom(start, target) => match game.start_custom(start, target) {
                Ok(snapshot) => {
                    writeln!(out, "\n🔄 New game started!\n")?;
                    write_snapshot(&mut out, &snapshot)?;
                }
                Err(err) => report(&mut out, err)?,
            },
            Command::History => {
                if game.history().is_empty() {
                    writeln!(out, "No finished games yet.")?;
                }
                for (i, past) in game.history().iter().enumerate() {
                    writeln!(
                        out,
                        "  {}. {} {}",
                        (i + 1).to_string().bright_black(),
                        past.status,
                        ladder_line(&past.path)
                    )?;
                }
            }
            Command::Move(word) => match game.make_move(word) {
                Ok(snapshot) => {
                    write_snapshot(&mut out, &snapshot)?;
                    if snapshot.status.is_finished() {
                        writeln!(out, "Type 'new' to play again or 'quit' to exit.")?;
                    }
                }
                Err(err) => report(&mut out, err)?,
            },
            Command::Unknown => report(&mut out, format!("Unrecognised input '{line}'"))?,
        }
        prompt(&mut out)?;
    }

    Ok(())
}

fn report<W: Write>(out: &mut W, err: impl Display) -> io::Result<()> {
    writeln!(out, "❌ {}", err.to_string().red())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
