//! Config and player save persistence

use stormrunner::storage::config::{load_config_from, save_config, GameConfig};
use stormrunner::storage::save::{PlayerData, SaveManager};
use tempfile::TempDir;

#[test]
fn test_config_round_trip_through_data_dir() {
    let dir = TempDir::new().unwrap();
    let mut config = GameConfig {
        data_dir: dir.path().to_path_buf(),
        ..GameConfig::default()
    };
    config.weather.auto_change = false;
    config.audio.music_volume = 0.25;
    save_config(&config).unwrap();

    let loaded = load_config_from(dir.path()).unwrap();
    assert!(!loaded.weather.auto_change);
    assert_eq!(loaded.audio.music_volume, 0.25);
    assert_eq!(loaded.saves_dir(), dir.path().join("saves"));
}

#[test]
fn test_player_save_round_trip() {
    let dir = TempDir::new().unwrap();
    let saves = SaveManager::new(dir.path().join("saves"));

    let mut data = PlayerData {
        player_name: "Runner".to_string(),
        high_score: 42,
        ..PlayerData::default()
    };
    saves.save(&mut data).unwrap();
    assert!(data.last_saved.is_some());

    let loaded = saves.load();
    assert_eq!(loaded.player_name, "Runner");
    assert_eq!(loaded.high_score, 42);
    assert_eq!(loaded.last_saved, data.last_saved);
}

#[test]
fn test_partial_save_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let saves = SaveManager::new(dir.path());
    std::fs::write(saves.save_path(), r#"{"player_name": "Ada"}"#).unwrap();

    let loaded = saves.load();
    assert_eq!(loaded.player_name, "Ada");
    assert!(!loaded.has_avatar);
    assert_eq!(loaded.skin_tone, 0.5);
}
