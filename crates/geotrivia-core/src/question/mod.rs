//! Question domain module.
//!
//! - `model`: the city/country pair and answer matching
//! - `pool`: the read-only master pool dealt into per-session decks

mod model;
mod pool;

pub use model::CityCountryPair;
pub use pool::QuestionPool;
