//! Game configuration.
//!
//! Loaded from `config.toml` in the data directory. Every field carries a serde
//! default, so a partial file only overrides what it names.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Window title shown by the desktop shell.
pub const GAME_TITLE: &str = "StormRunner - 3D Adventure Game";

/// Top-level game configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Configuration format version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Logical canvas settings
    pub display: DisplayConfig,
    /// Weather simulation settings
    pub weather: WeatherConfig,
    /// Follow camera settings
    pub camera: CameraConfig,
    /// Player movement settings
    pub player: PlayerConfig,
    /// Volume settings
    pub audio: AudioSettings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            display: DisplayConfig::default(),
            weather: WeatherConfig::default(),
            camera: CameraConfig::default(),
            player: PlayerConfig::default(),
            audio: AudioSettings::default(),
        }
    }
}

impl GameConfig {
    /// Directory holding the player save and the avatar image.
    pub fn saves_dir(&self) -> PathBuf {
        self.data_dir.join("saves")
    }
}

/// Logical canvas settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Window title
    pub title: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: GAME_TITLE.to_string(),
        }
    }
}

impl DisplayConfig {
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }
}

/// Weather simulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Simulation time between automatic weather rolls
    pub change_interval_ms: f32,
    /// Size of the rain particle pool
    pub rain_particles: usize,
    /// How long a lightning flash stays visible
    pub lightning_duration_ms: f32,
    /// Roll a new weather mode every `change_interval_ms`
    pub auto_change: bool,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            change_interval_ms: 30_000.0,
            rain_particles: 200,
            lightning_duration_ms: 100.0,
            auto_change: true,
        }
    }
}

/// Follow camera settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Width of the box the target can move in without the camera following
    pub dead_zone_width: f32,
    /// Height of the vertical dead zone
    pub dead_zone_height: f32,
    /// Horizontal smoothing factor per update (0-1)
    pub follow_speed: f32,
    /// Furthest the camera may scroll upward
    pub max_vertical_offset: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            dead_zone_width: 200.0,
            dead_zone_height: 100.0,
            follow_speed: 0.1,
            max_vertical_offset: 200.0,
        }
    }
}

/// Player movement settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub speed: f32,
    pub run_speed: f32,
    pub jump_strength: f32,
    pub gravity: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            run_speed: 8.0,
            jump_strength: 15.0,
            gravity: 0.8,
        }
    }
}

/// Volume settings, each in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub enabled: bool,
    pub master_volume: f32,
    pub music_volume: f32,
    pub sfx_volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            master_volume: 0.7,
            music_volume: 0.5,
            sfx_volume: 0.8,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "stormrunner", "StormRunner")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load configuration from the default location.
pub fn load_config() -> Result<GameConfig, ConfigError> {
    load_config_from(&get_data_dir())
}

/// Load configuration from `config.toml` inside `data_dir`.
///
/// A missing file yields defaults.
pub fn load_config_from(data_dir: &Path) -> Result<GameConfig, ConfigError> {
    let path = data_dir.join("config.toml");

    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(GameConfig {
            data_dir: data_dir.to_path_buf(),
            ..Default::default()
        });
    }

    let content =
        std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: GameConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = data_dir.to_path_buf();

    Ok(config)
}

/// Save configuration to `config.toml` inside its data directory.
pub fn save_config(config: &GameConfig) -> Result<(), ConfigError> {
    let path = config.data_dir.join("config.toml");

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    tracing::info!("Saved config to {}", path.display());
    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(dir.path()).unwrap();

        assert_eq!(config.display.width, 1280);
        assert_eq!(config.display.height, 720);
        assert_eq!(config.weather.rain_particles, 200);
        assert!(config.weather.auto_change);
        assert_eq!(config.data_dir, dir.path());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[weather]\nauto_change = false\n\n[audio]\nmaster_volume = 0.25\n",
        )
        .unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert!(!config.weather.auto_change);
        assert_eq!(config.weather.change_interval_ms, 30_000.0);
        assert_eq!(config.audio.master_volume, 0.25);
        assert_eq!(config.audio.sfx_volume, 0.8);
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn test_window_title_from_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[display]\ntitle = \"Storm Test\"\n",
        )
        .unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.display.title, "Storm Test");
        assert_eq!(config.display.width, 1280);
        assert_eq!(load_config_from(&dir.path().join("none")).unwrap().display.title, GAME_TITLE);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut config = GameConfig {
            data_dir: dir.path().join("nested"),
            ..Default::default()
        };
        config.weather.change_interval_ms = 5_000.0;
        config.audio.music_volume = 0.1;

        save_config(&config).unwrap();
        let loaded = load_config_from(&config.data_dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.toml"), "[weather\nbroken").unwrap();

        let result = load_config_from(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
