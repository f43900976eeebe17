//! Simple interactive CLI mode
//!
//! Line-oriented game loop: read a guess, print the verdict, repeat until the
//! secret is found.

use crate::config::GameConfig;
use crate::core::{Difficulty, GameSession, GuessError, Parity, Trend, Verdict};
use crate::output::formatters::{format_attempts, pluralize_attempts};
use crate::scores::ScoreStore;
use anyhow::Result;
use colored::Colorize;
use log::warn;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// What happened in a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub difficulty: Difficulty,
    pub secret: u32,
    pub attempts: Vec<u32>,
    pub new_record: bool,
    pub saved: bool,
}

/// Run the simple CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error on the terminal.
pub fn run_simple(config: &GameConfig, store: &mut ScoreStore) -> Result<Option<RoundSummary>> {
    let mut rng = config.rng();
    let session = config.new_session(config.difficulty, &mut rng);

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_round(
        stdin.lock(),
        stdout.lock(),
        session,
        config.difficulty,
        store,
        &config.scores_path,
    )
}

/// Play one round reading guesses from `input`
///
/// `0` asks for the parity hint, `q` leaves. Returns `None` if the player
/// leaves or input ends before the secret is found.
///
/// # Errors
///
/// Returns an error on I/O failure, or if `session` was already finished.
pub fn play_round<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    mut session: GameSession,
    difficulty: Difficulty,
    store: &mut ScoreStore,
    scores_path: &Path,
) -> Result<Option<RoundSummary>> {
    writeln!(
        out,
        "🎲 Guess the number between 1 and {}!",
        session.max_range()
    )?;
    writeln!(out, "Type 0 if you want a hint! ('q' to quit)")?;
    match store.best(difficulty) {
        Some(best) => writeln!(out, "Difficulty: {difficulty} | Best: {best}\n")?,
        None => writeln!(out, "Difficulty: {difficulty} | Best: -\n")?,
    }

    let mut line = String::new();
    loop {
        write!(out, "Your guess: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "\n👋 Thanks for playing!")?;
            return Ok(None);
        }

        let text = line.trim();
        match text {
            "" => continue,
            "q" | "quit" | "exit" => {
                writeln!(out, "👋 Thanks for playing! The number was {}.", session.secret())?;
                return Ok(None);
            }
            _ => {}
        }

        let Ok(value) = text.parse::<i64>() else {
            writeln!(out, "{}", format!("❌ '{text}' is not a whole number.").red())?;
            continue;
        };

        if value == 0 {
            writeln!(out, "{}", Parity::of(session.secret()).message().cyan())?;
            continue;
        }

        let outcome = match session.submit_guess(value) {
            Ok(outcome) => outcome,
            Err(err @ GuessError::Inactive) => return Err(err.into()),
            Err(err) => {
                writeln!(out, "{}", format!("❌ {err}").red())?;
                continue;
            }
        };

        match outcome.verdict {
            Verdict::TooLow | Verdict::TooHigh => {
                writeln!(out, "{}", outcome.verdict.direction().yellow().bold())?;
                writeln!(
                    out,
                    "Your attempts so far: {}",
                    format_attempts(session.attempts())
                )?;
                writeln!(
                    out,
                    "🔍 You're {} away from the secret number.",
                    outcome.difference
                )?;
                if let Some(message) =
                    Trend::from_attempts(session.secret(), session.attempts()).message()
                {
                    writeln!(out, "{message}")?;
                }
                writeln!(out)?;
            }
            Verdict::Correct => break,
        }
    }

    let attempts = session.attempt_count();
    writeln!(
        out,
        "\n{}",
        format!("🎉 Correct! The number was {}.", session.secret())
            .bright_green()
            .bold()
    )?;
    writeln!(out, "You guessed it in {}.", pluralize_attempts(attempts))?;

    let new_record = store.record_win(difficulty, u32::try_from(attempts).unwrap_or(u32::MAX));
    let saved = match store.save(scores_path) {
        Ok(()) => true,
        Err(err) => {
            warn!("{err}");
            writeln!(out, "{}", format!("⚠️ Could not save best score: {err}").yellow())?;
            false
        }
    };

    if new_record {
        writeln!(
            out,
            "{}",
            format!("🏆 New best for {difficulty}!").bright_yellow().bold()
        )?;
    } else if let Some(best) = store.best(difficulty) {
        writeln!(out, "Best for {difficulty}: {best}")?;
    }

    Ok(Some(RoundSummary {
        difficulty,
        secret: session.secret(),
        attempts: session.attempts().to_vec(),
        new_record,
        saved,
    }))
}
