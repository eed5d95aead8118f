//! UI widgets for reusable components.

pub mod canvas_button;

pub use canvas_button::{ButtonColumn, CanvasButton};
