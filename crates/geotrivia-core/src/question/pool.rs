//! The master question pool.

use super::model::CityCountryPair;

/// City/country pairs shipped with the game.
const BUILTIN_PAIRS: [(&str, &str); 15] = [
    ("Paris", "France"),
    ("Berlin", "Germany"),
    ("Madrid", "Spain"),
    ("Rome", "Italy"),
    ("Tokyo", "Japan"),
    ("Ottawa", "Canada"),
    ("Canberra", "Australia"),
    ("Cairo", "Egypt"),
    ("Oslo", "Norway"),
    ("Lisbon", "Portugal"),
    ("Helsinki", "Finland"),
    ("Athens", "Greece"),
    ("Seoul", "South Korea"),
    ("Nairobi", "Kenya"),
    ("Lima", "Peru"),
];

/// Read-only master list of city/country pairs.
///
/// The pool itself is never mutated once built; each session receives its
/// own working copy via [`QuestionPool::deal`].
#[derive(Debug, Clone)]
pub struct QuestionPool {
    pairs: Vec<CityCountryPair>,
}

impl QuestionPool {
    /// The built-in pool shipped with the game.
    pub fn builtin() -> Self {
        Self::from_pairs(
            BUILTIN_PAIRS
                .iter()
                .map(|&(city, country)| CityCountryPair::new(city, country))
                .collect(),
        )
    }

    /// Creates a pool from an explicit list of pairs.
    pub fn from_pairs(pairs: Vec<CityCountryPair>) -> Self {
        Self { pairs }
    }

    /// Number of questions in the pool.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true when the pool holds no questions at all.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// All pairs in the pool.
    pub fn pairs(&self) -> &[CityCountryPair] {
        &self.pairs
    }

    /// Deals a fresh working copy for one session.
    ///
    /// The master list is left untouched; the returned deck is consumed by
    /// the session as questions are drawn.
    pub fn deal(&self) -> Vec<CityCountryPair> {
        self.pairs.clone()
    }
}
