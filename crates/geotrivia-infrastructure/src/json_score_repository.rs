//! JSON-backed score history repository.
//!
//! Stores the full score list as a pretty-printed JSON array so the file
//! stays readable and diffable. Saves go through a temporary sibling file
//! followed by an atomic rename.

use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use geotrivia_core::Result;
use geotrivia_core::score::{Score, ScoreRepository};

/// Default on-disk location of the score history, relative to the working
/// directory.
pub const DEFAULT_SCORES_PATH: &str = "scores.json";

/// Score repository backed by a single JSON file.
///
/// The whole history is rewritten on every save; there is no append-in-place.
pub struct JsonScoreRepository {
    path: PathBuf,
}

impl JsonScoreRepository {
    /// Creates a repository reading and writing the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository at the default `scores.json` location.
    pub fn default_location() -> Self {
        Self::new(DEFAULT_SCORES_PATH)
    }

    /// The file this repository reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Temporary sibling path used for atomic saves.
    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_SCORES_PATH.to_string());
        let tmp_name = format!(".{}.tmp", file_name);
        match self.path.parent() {
            Some(parent) => parent.join(tmp_name),
            None => PathBuf::from(tmp_name),
        }
    }
}

impl ScoreRepository for JsonScoreRepository {
    /// Loads the score history.
    ///
    /// A missing or empty file loads as an empty history. Unreadable or
    /// malformed content is propagated as an error; the caller decides
    /// whether that is fatal.
    fn load(&self) -> Result<Vec<Score>> {
        if !self.path.exists() {
            tracing::debug!("no score file at {:?}, starting with empty history", self.path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let scores: Vec<Score> = serde_json::from_str(&content)?;
        tracing::debug!("loaded {} scores from {:?}", scores.len(), self.path);
        Ok(scores)
    }

    /// Saves the full score history atomically.
    ///
    /// The list is serialized to pretty-printed JSON, written to a
    /// `.tmp`-suffixed sibling, synced, and renamed over the target so a
    /// crashed save never leaves a half-written history behind.
    fn save(&self, scores: &[Score]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(scores)?;

        let tmp_path = self.temp_path();
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;

        // Ensure data is on disk before the rename makes it visible
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        tracing::debug!("saved {} scores to {:?}", scores.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_scores() -> Vec<Score> {
        vec![
            Score {
                user: "user0".to_string(),
                points: 3,
                time: "Friday, January 5th 2024 14:32".to_string(),
            },
            Score {
                user: "user1".to_string(),
                points: 0,
                time: "Saturday, January 6th 2024 09:05".to_string(),
            },
        ]
    }

    #[test]
    fn test_save_and_load_round_trip_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonScoreRepository::new(temp_dir.path().join("scores.json"));

        let scores = sample_scores();
        repository.save(&scores).unwrap();

        let loaded = repository.load().unwrap();
        assert_eq!(loaded, scores);
    }

    #[test]
    fn test_load_missing_file_returns_empty_history() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonScoreRepository::new(temp_dir.path().join("scores.json"));

        let loaded = repository.load().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_empty_file_returns_empty_history() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.json");
        fs::write(&path, "  \n").unwrap();

        let repository = JsonScoreRepository::new(path);
        let loaded = repository.load().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.json");
        fs::write(&path, "{ not json ]").unwrap();

        let repository = JsonScoreRepository::new(path);
        let err = repository.load().unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_save_overwrites_previous_history() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonScoreRepository::new(temp_dir.path().join("scores.json"));

        repository.save(&sample_scores()).unwrap();

        let shorter = vec![Score {
            user: "user0".to_string(),
            points: 7,
            time: "Sunday, February 11th 2024 20:00".to_string(),
        }];
        repository.save(&shorter).unwrap();

        let loaded = repository.load().unwrap();
        assert_eq!(loaded, shorter);
    }

    #[test]
    fn test_save_leaves_no_temp_file_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.json");
        let repository = JsonScoreRepository::new(path.clone());

        repository.save(&sample_scores()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join(".scores.json.tmp").exists());
    }

    #[test]
    fn test_save_creates_missing_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("scores.json");
        let repository = JsonScoreRepository::new(path.clone());

        repository.save(&sample_scores()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_saved_file_is_pretty_printed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.json");
        let repository = JsonScoreRepository::new(path.clone());

        repository.save(&sample_scores()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("  \"user\": \"user0\""));
    }
}
