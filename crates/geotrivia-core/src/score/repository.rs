//! Score repository trait.

use super::model::Score;
use crate::Result;

/// Repository trait for score history persistence.
///
/// The history is loaded once at startup and rewritten wholesale when a
/// session ends; there is no partial append. Insertion order is
/// chronological and must be preserved across a load/save round trip.
pub trait ScoreRepository: Send + Sync {
    /// Loads all persisted scores in chronological order.
    ///
    /// A missing history is not an error and loads as an empty list.
    fn load(&self) -> Result<Vec<Score>>;

    /// Replaces the persisted history with `scores`.
    fn save(&self, scores: &[Score]) -> Result<()>;
}
