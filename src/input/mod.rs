//! Input handling module.
//!
//! Maps egui keyboard state onto gameplay actions.

pub mod keyboard;

pub use keyboard::{GameAction, InputState};
