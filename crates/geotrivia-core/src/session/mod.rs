//! Session domain module.
//!
//! One session is a single round of play from start to game over. All
//! mutable round state lives in [`SessionState`]; there are no ambient
//! globals, and the "ask next question" cycle is an explicit loop driven by
//! the caller.

mod state;

pub use state::{AnswerOutcome, EndReason, MAX_WRONG_ANSWERS, SessionState, next_user_label};
