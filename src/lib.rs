//! StormRunner - side-scrolling weather adventure
//!
//! A 2D runner whose world is driven by a weather simulator (clear, rain, storm
//! with lightning) and a dead-zone follow camera. The simulation in [`world`]
//! is window-independent; [`ui`] hosts it in an eframe/egui desktop shell with
//! a main menu, avatar creation and settings.

pub mod audio;
pub mod input;
pub mod storage;
pub mod ui;
pub mod world;

// Re-export commonly used types
pub use storage::config::GameConfig;
pub use world::{CameraController, GameRng, PlaySession, WeatherMode, WeatherSimulator};
