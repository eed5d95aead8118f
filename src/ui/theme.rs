//! UI theme definitions.

use egui::{Color32, Visuals};

/// Storm palette used by the egui-widget screens.
pub struct StormTheme;

impl StormTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(20, 28, 32);
    /// Panel background (storm sky)
    pub const PANEL_BG: Color32 = Color32::from_rgb(47, 79, 79);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(64, 64, 64);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(192, 192, 192);
    /// Muted text
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(128, 128, 128);
    /// Accent color (button blue)
    pub const ACCENT: Color32 = Color32::from_rgb(0, 100, 200);
    /// Success color
    pub const SUCCESS: Color32 = Color32::from_rgb(0, 200, 0);
    /// Error color
    pub const ERROR: Color32 = Color32::from_rgb(200, 0, 0);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(192, 192, 192);

    /// egui visuals for the game's form screens.
    pub fn visuals() -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.window_fill = Self::PANEL_BG;
        visuals.panel_fill = Self::PANEL_BG;
        visuals.faint_bg_color = Self::CARD_BG;
        visuals.extreme_bg_color = Self::BACKGROUND;

        visuals.widgets.noninteractive.bg_fill = Self::CARD_BG;
        visuals.widgets.inactive.bg_fill = Self::CARD_BG;
        visuals.widgets.inactive.weak_bg_fill = Self::CARD_BG;
        visuals.widgets.hovered.bg_fill = Self::ACCENT;
        visuals.widgets.hovered.weak_bg_fill = Self::ACCENT;
        visuals.widgets.active.bg_fill = Self::ACCENT;

        visuals.selection.bg_fill = Self::ACCENT.linear_multiply(0.6);
        visuals.selection.stroke.color = Self::TEXT_PRIMARY;

        visuals.widgets.noninteractive.fg_stroke.color = Self::TEXT_PRIMARY;
        visuals.widgets.inactive.fg_stroke.color = Self::TEXT_SECONDARY;
        visuals.widgets.hovered.fg_stroke.color = Self::TEXT_PRIMARY;
        visuals.widgets.active.fg_stroke.color = Self::TEXT_PRIMARY;

        visuals.widgets.noninteractive.bg_stroke.color = Self::BORDER;
        visuals.widgets.inactive.bg_stroke.color = Self::BORDER;

        visuals
    }
}
