//! UI module for the egui shell.
//!
//! Canvas screens paint through [`surface::EguiSurface`]; form screens use
//! regular egui widgets styled by [`theme::StormTheme`].

pub mod screens;
pub mod surface;
pub mod theme;
pub mod widgets;

pub use screens::Screen;
pub use surface::EguiSurface;
pub use theme::StormTheme;
