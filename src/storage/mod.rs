//! Storage module for configuration and player saves.

pub mod config;
pub mod save;

pub use config::{ConfigError, GameConfig};
pub use save::{PlayerData, SaveError, SaveManager};
