//! Player save data.
//!
//! Stored as pretty-printed JSON in `<data_dir>/saves/player_data.json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Save file name inside the saves directory.
pub const SAVE_FILE_NAME: &str = "player_data.json";
/// Avatar image file name inside the saves directory.
pub const AVATAR_FILE_NAME: &str = "avatar.png";

/// Persistent player profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerData {
    /// Name shown above the player and on the HUD
    pub player_name: String,
    /// Whether an avatar image has been confirmed
    pub has_avatar: bool,
    /// Path of the confirmed avatar image
    pub avatar_path: Option<PathBuf>,
    /// Skin tone slider (0-1)
    pub skin_tone: f32,
    /// Hair style slider (0-1)
    pub hair_style: f32,
    /// Eye color slider (0-1)
    pub eye_color: f32,
    pub game_progress: u32,
    pub high_score: u32,
    /// When the data was last written
    pub last_saved: Option<DateTime<Utc>>,
}

impl Default for PlayerData {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            has_avatar: false,
            avatar_path: None,
            skin_tone: 0.5,
            hair_style: 0.5,
            eye_color: 0.5,
            game_progress: 0,
            high_score: 0,
            last_saved: None,
        }
    }
}

impl PlayerData {
    /// Avatar path if one was confirmed and still exists on disk.
    pub fn existing_avatar(&self) -> Option<&Path> {
        if !self.has_avatar {
            return None;
        }
        self.avatar_path.as_deref().filter(|p| p.exists())
    }
}

/// Errors from reading or writing the save file.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Reads and writes [`PlayerData`] in a saves directory.
#[derive(Debug, Clone)]
pub struct SaveManager {
    saves_dir: PathBuf,
}

impl SaveManager {
    pub fn new(saves_dir: impl Into<PathBuf>) -> Self {
        Self {
            saves_dir: saves_dir.into(),
        }
    }

    pub fn saves_dir(&self) -> &Path {
        &self.saves_dir
    }

    pub fn save_path(&self) -> PathBuf {
        self.saves_dir.join(SAVE_FILE_NAME)
    }

    pub fn avatar_path(&self) -> PathBuf {
        self.saves_dir.join(AVATAR_FILE_NAME)
    }

    /// Read the save file.
    ///
    /// Returns `Ok(None)` when no save exists yet.
    pub fn try_load(&self) -> Result<Option<PlayerData>, SaveError> {
        let path = self.save_path();
        if !path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| SaveError::IoError(e.to_string()))?;
        let data =
            serde_json::from_str(&content).map_err(|e| SaveError::JsonError(e.to_string()))?;

        Ok(Some(data))
    }

    /// Load player data, falling back to defaults when the save is missing or
    /// unreadable.
    pub fn load(&self) -> PlayerData {
        match self.try_load() {
            Ok(Some(data)) => {
                tracing::info!("Loaded player data for {}", data.player_name);
                data
            }
            Ok(None) => PlayerData::default(),
            Err(e) => {
                tracing::warn!("Failed to load player data, using defaults: {}", e);
                PlayerData::default()
            }
        }
    }

    /// Write player data, creating the saves directory if needed.
    ///
    /// Stamps `last_saved` on the stored copy.
    pub fn save(&self, data: &mut PlayerData) -> Result<(), SaveError> {
        std::fs::create_dir_all(&self.saves_dir).map_err(|e| SaveError::IoError(e.to_string()))?;

        data.last_saved = Some(Utc::now());
        let content =
            serde_json::to_string_pretty(data).map_err(|e| SaveError::JsonError(e.to_string()))?;
        std::fs::write(self.save_path(), content).map_err(|e| SaveError::IoError(e.to_string()))?;

        tracing::debug!("Saved player data to {}", self.save_path().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let data = PlayerData::default();
        assert_eq!(data.player_name, "Player");
        assert!(!data.has_avatar);
        assert_eq!(data.skin_tone, 0.5);
        assert!(data.existing_avatar().is_none());
    }

    #[test]
    fn test_missing_save_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = SaveManager::new(dir.path().join("saves"));

        assert!(manager.try_load().unwrap().is_none());
        assert_eq!(manager.load(), PlayerData::default());
    }

    #[test]
    fn test_corrupt_save_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = SaveManager::new(dir.path());
        std::fs::write(manager.save_path(), "{ not json").unwrap();

        assert!(matches!(manager.try_load(), Err(SaveError::JsonError(_))));
        assert_eq!(manager.load(), PlayerData::default());
    }

    #[test]
    fn test_existing_avatar_requires_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("avatar.png");
        let mut data = PlayerData {
            has_avatar: true,
            avatar_path: Some(path.clone()),
            ..Default::default()
        };
        assert!(data.existing_avatar().is_none());

        std::fs::write(&path, b"png").unwrap();
        assert_eq!(data.existing_avatar(), Some(path.as_path()));

        data.has_avatar = false;
        assert!(data.existing_avatar().is_none());
    }
}
