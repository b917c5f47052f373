//! Infrastructure layer for the geotrivia game.
//!
//! Provides the file-backed implementation of the score repository defined
//! in `geotrivia-core`.

pub mod json_score_repository;

pub use json_score_repository::{DEFAULT_SCORES_PATH, JsonScoreRepository};
