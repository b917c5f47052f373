//! Interactive terminal front end for the geotrivia game.
//!
//! A single-threaded rustyline loop drives everything: the top-level menu
//! dispatches on one line of input, and while a session is active every line
//! is consumed by answer evaluation instead. Exactly one input line is read
//! per state transition.

use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;

use geotrivia_core::question::QuestionPool;
use geotrivia_core::score::{Score, ScoreRepository};
use geotrivia_core::session::{AnswerOutcome, EndReason, SessionState, next_user_label};
use geotrivia_infrastructure::JsonScoreRepository;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let repository = JsonScoreRepository::default_location();
    let mut scores = repository
        .load()
        .with_context(|| format!("failed to load score history from {:?}", repository.path()))?;
    tracing::debug!("score history loaded: {} entries", scores.len());

    let pool = QuestionPool::builtin();
    let mut rl = DefaultEditor::new()?;

    println!("{}", "=== Geotrivia ===".bright_magenta().bold());
    display_menu();

    loop {
        let Some(line) = read_line(&mut rl, ">> ")? else {
            break;
        };

        match line.trim() {
            "1" => {
                let _ = rl.add_history_entry(&line);
                if run_session(&mut rl, &pool, &mut scores, &repository)?.is_none() {
                    break;
                }
                display_menu();
            }
            "2" => {
                let _ = rl.add_history_entry(&line);
                if show_scores(&mut rl, &scores)?.is_none() {
                    break;
                }
                display_menu();
            }
            // anything else silently re-prompts
            _ => display_menu(),
        }
    }

    println!("{}", "Goodbye!".bright_green());
    Ok(())
}

/// Prints the top-level menu.
fn display_menu() {
    println!();
    println!("Menu:");
    println!("1. Start");
    println!("2. See Scores");
}

/// Reads one line of input, looping on Ctrl-C.
///
/// Returns `None` when the input stream ends (Ctrl-D); callers treat that
/// as a request to exit the program.
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    loop {
        match rl.readline(prompt) {
            Ok(line) => return Ok(Some(line)),
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Press CTRL-D to exit.".yellow());
            }
            Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err).context("failed to read from the terminal"),
        }
    }
}

/// Renders the persisted score history and waits for one line of input
/// before handing control back to the menu.
fn show_scores(rl: &mut DefaultEditor, scores: &[Score]) -> Result<Option<()>> {
    println!("User Scores:");
    for score in scores {
        println!(
            "{}",
            format!("{} : {} points -- {}", score.user, score.points, score.time).yellow()
        );
    }
    pause_for_menu(rl)
}

/// Plays one full session: question loop, score append, persisted save,
/// game-over summary.
///
/// Returns `None` when the input stream closed mid-session; the round is
/// discarded unsaved in that case.
fn run_session(
    rl: &mut DefaultEditor,
    pool: &QuestionPool,
    scores: &mut Vec<Score>,
    repository: &dyn ScoreRepository,
) -> Result<Option<()>> {
    let mut session = SessionState::new(next_user_label(scores), pool);
    let mut rng = rand::thread_rng();
    tracing::debug!("session started for {}", session.user());

    let reason = loop {
        if let Some(reason) = session.end_reason() {
            break reason;
        }
        // end_reason ruled out an empty deck, so a question is available
        let Some(pair) = session.draw_question(&mut rng) else {
            break EndReason::PoolExhausted;
        };

        println!();
        println!("Which country is {} in?", pair.city);
        println!(
            "{}",
            format!("({} wrong answers left)", session.remaining_attempts()).blue()
        );

        let Some(line) = read_line(rl, "> ")? else {
            return Ok(None);
        };

        match session.answer(&pair, &line) {
            AnswerOutcome::Correct => {
                println!("{}", format!("{} is correct!", line.trim()).green());
            }
            AnswerOutcome::Incorrect { expected } => {
                println!(
                    "{} The correct answer is {}",
                    format!("{} is incorrect.", line.trim()).red(),
                    expected.green()
                );
            }
        }
    };

    let points = session.points();
    scores.push(session.into_score(Local::now()));
    repository
        .save(scores)
        .context("failed to save score history")?;

    let summary = match reason {
        EndReason::PoolExhausted => "Game over. You have answered all available questions.",
        EndReason::TooManyWrongAnswers => {
            "Game over. You have reached the maximum number of wrong answers."
        }
    };
    println!("{}", format!("{}\nYou got {} points", summary, points).magenta());

    pause_for_menu(rl)
}

/// Waits for one line of input (content ignored) before returning to the
/// menu. Returns `None` on end of input.
fn pause_for_menu(rl: &mut DefaultEditor) -> Result<Option<()>> {
    println!("\nPress any key to return to menu.");
    Ok(read_line(rl, "")?.map(|_| ()))
}
