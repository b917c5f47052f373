//! Core domain for the geotrivia terminal game.
//!
//! Contains the question pool, the per-session state machine, the persisted
//! score record with its repository interface, and the shared error type.
//! Persistence implementations live in `geotrivia-infrastructure`; the
//! interactive loop lives in `geotrivia-readline`.

pub mod error;
pub mod question;
pub mod score;
pub mod session;

// Re-export common error type
pub use error::{GeotriviaError, Result};
