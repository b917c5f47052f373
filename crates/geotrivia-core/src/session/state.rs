//! Per-session game state machine.

use chrono::{DateTime, Local};
use rand::Rng;

use crate::question::{CityCountryPair, QuestionPool};
use crate::score::Score;

/// Wrong answers allowed before a session is cut short.
pub const MAX_WRONG_ANSWERS: u32 = 5;

/// Why a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Every question in the pool has been asked.
    PoolExhausted,
    /// The wrong-answer limit was reached.
    TooManyWrongAnswers,
}

/// Outcome of evaluating one submitted answer line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The answer matched the expected country.
    Correct,
    /// The answer missed; carries the country that was expected.
    Incorrect { expected: String },
}

/// State for a single round of play.
///
/// Created fresh at session start and consumed into a [`Score`] when the
/// round ends; never reused across sessions. While the session is active,
/// `wrong_answers` never exceeds [`MAX_WRONG_ANSWERS`] and the working deck
/// only ever shrinks, so no question repeats within a round.
#[derive(Debug, Clone)]
pub struct SessionState {
    user: String,
    points: u32,
    wrong_answers: u32,
    available_pairs: Vec<CityCountryPair>,
}

impl SessionState {
    /// Starts a fresh session for `user`, dealing a working copy of the
    /// pool.
    pub fn new(user: impl Into<String>, pool: &QuestionPool) -> Self {
        Self {
            user: user.into(),
            points: 0,
            wrong_answers: 0,
            available_pairs: pool.deal(),
        }
    }

    /// Player label for this session.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Correct answers so far.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Wrong answers so far.
    pub fn wrong_answers(&self) -> u32 {
        self.wrong_answers
    }

    /// Wrong answers left before the session is cut short.
    pub fn remaining_attempts(&self) -> u32 {
        MAX_WRONG_ANSWERS - self.wrong_answers
    }

    /// Questions not yet asked this session.
    pub fn remaining_questions(&self) -> usize {
        self.available_pairs.len()
    }

    /// Returns the end reason once a terminal condition holds.
    ///
    /// The wrong-answer limit takes precedence over exhaustion: an empty
    /// deck is only reported when the next question would have to be drawn.
    /// A pool that was empty at session start ends the round immediately
    /// with [`EndReason::PoolExhausted`] and zero points.
    pub fn end_reason(&self) -> Option<EndReason> {
        if self.wrong_answers >= MAX_WRONG_ANSWERS {
            Some(EndReason::TooManyWrongAnswers)
        } else if self.available_pairs.is_empty() {
            Some(EndReason::PoolExhausted)
        } else {
            None
        }
    }

    /// Draws the next question uniformly at random.
    ///
    /// The drawn pair is removed from the working deck so it cannot recur
    /// within this session. Returns `None` when the deck is empty.
    pub fn draw_question<R: Rng>(&mut self, rng: &mut R) -> Option<CityCountryPair> {
        if self.available_pairs.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.available_pairs.len());
        let pair = self.available_pairs.swap_remove(index);
        tracing::debug!(
            "question drawn: {} ({} remaining)",
            pair.city,
            self.available_pairs.len()
        );
        Some(pair)
    }

    /// Evaluates one line of answer input against the drawn question.
    ///
    /// Exactly one of `points` or `wrong_answers` is incremented per call.
    pub fn answer(&mut self, pair: &CityCountryPair, input: &str) -> AnswerOutcome {
        if pair.matches_answer(input) {
            self.points += 1;
            AnswerOutcome::Correct
        } else {
            self.wrong_answers += 1;
            AnswerOutcome::Incorrect {
                expected: pair.country.clone(),
            }
        }
    }

    /// Closes the session, producing the record to append to the history.
    pub fn into_score(self, recorded_at: DateTime<Local>) -> Score {
        tracing::debug!(
            "session over for {}: {} points, {} wrong answers",
            self.user,
            self.points,
            self.wrong_answers
        );
        Score::new(self.user, self.points, recorded_at)
    }
}

/// Derives the label for the next session's player: `user<N>` where N is
/// the number of scores already on record.
///
/// The label is a sequential tag, not a stable identity: two sessions
/// started from the same history length receive the same label.
pub fn next_user_label(scores: &[Score]) -> String {
    format!("user{}", scores.len())
}
