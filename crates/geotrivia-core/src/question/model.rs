//! City/country question model.

use serde::{Deserialize, Serialize};

/// A single trivia question: a city and the country it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCountryPair {
    /// City presented to the player.
    pub city: String,
    /// Country expected as the answer.
    pub country: String,
}

impl CityCountryPair {
    /// Creates a new question pair.
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
        }
    }

    /// Checks a submitted answer against the expected country.
    ///
    /// Both sides are trimmed of surrounding whitespace and lower-cased
    /// before comparison; anything short of exact equality after that is a
    /// miss. An empty line is simply an incorrect answer.
    pub fn matches_answer(&self, input: &str) -> bool {
        input.trim().to_lowercase() == self.country.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_matching_is_case_insensitive() {
        let pair = CityCountryPair::new("Paris", "France");
        assert!(pair.matches_answer("France"));
        assert!(pair.matches_answer("FRANCE"));
        assert!(pair.matches_answer("france"));
    }

    #[test]
    fn test_answer_matching_trims_whitespace() {
        let pair = CityCountryPair::new("Paris", "France");
        assert!(pair.matches_answer(" france "));
        assert!(pair.matches_answer("\tFrance\n"));
    }

    #[test]
    fn test_answer_matching_requires_exact_equality() {
        let pair = CityCountryPair::new("Paris", "France");
        assert!(!pair.matches_answer("Franc"));
        assert!(!pair.matches_answer("La France"));
        assert!(!pair.matches_answer(""));
    }
}
