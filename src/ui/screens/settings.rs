//! Settings screen implementation.

use egui::{RichText, Ui};

use crate::storage::config::{AudioSettings, GameConfig, WeatherConfig};
use crate::ui::theme::StormTheme;

/// Outcome of a settings frame
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsAction {
    /// Persist these values
    Save(GameConfig),
    /// Discard edits and leave
    Cancel,
}

/// Settings screen state.
pub struct SettingsScreen {
    /// Audio values being edited
    pub audio: AudioSettings,
    /// Weather values being edited
    pub weather: WeatherConfig,
    /// Config the edits started from
    original: GameConfig,
    /// Has unsaved changes
    pub has_changes: bool,
    pub error_message: Option<String>,
}

impl SettingsScreen {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            audio: config.audio.clone(),
            weather: config.weather.clone(),
            original: config.clone(),
            has_changes: false,
            error_message: None,
        }
    }

    /// Restart editing from `config`.
    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }

    /// Revert to the values the screen was opened with.
    pub fn cancel(&mut self) {
        let original = self.original.clone();
        self.reset(&original);
    }

    /// Config with the edited values applied
    pub fn edited_config(&self) -> GameConfig {
        let mut config = self.original.clone();
        config.audio = self.audio.clone();
        config.weather = self.weather.clone();
        config
    }

    /// Render the screen and return a save or cancel request.
    pub fn show(&mut self, ui: &mut Ui) -> Option<SettingsAction> {
        let mut result = None;

        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.label(RichText::new("Settings").size(40.0).strong());
            ui.add_space(24.0);
        });

        ui.columns(2, |columns| {
            columns[0].vertical(|ui| {
                ui.heading("Audio");
                ui.add_space(8.0);
                let mut changed = false;
                changed |= ui
                    .checkbox(&mut self.audio.enabled, "Sound enabled")
                    .changed();
                changed |= ui
                    .add(egui::Slider::new(&mut self.audio.master_volume, 0.0..=1.0).text("Master"))
                    .changed();
                changed |= ui
                    .add(egui::Slider::new(&mut self.audio.music_volume, 0.0..=1.0).text("Music"))
                    .changed();
                changed |= ui
                    .add(egui::Slider::new(&mut self.audio.sfx_volume, 0.0..=1.0).text("Effects"))
                    .changed();
                self.has_changes |= changed;
            });

            columns[1].vertical(|ui| {
                ui.heading("Weather");
                ui.add_space(8.0);
                let mut changed = ui
                    .checkbox(&mut self.weather.auto_change, "Change weather automatically")
                    .changed();

                let mut seconds = self.weather.change_interval_ms / 1000.0;
                let slider = ui.add_enabled(
                    self.weather.auto_change,
                    egui::Slider::new(&mut seconds, 5.0..=120.0)
                        .text("Change every")
                        .suffix(" s"),
                );
                if slider.changed() {
                    self.weather.change_interval_ms = seconds * 1000.0;
                    changed = true;
                }
                self.has_changes |= changed;
            });
        });

        ui.add_space(24.0);
        if let Some(error) = &self.error_message {
            ui.label(RichText::new(error).color(StormTheme::ERROR));
        }

        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.has_changes, egui::Button::new("Save"))
                .clicked()
            {
                result = Some(SettingsAction::Save(self.edited_config()));
            }
            if ui.button("Cancel").clicked() {
                self.cancel();
                result = Some(SettingsAction::Cancel);
            }
        });

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.cancel();
            result = Some(SettingsAction::Cancel);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edited_config_keeps_other_sections() {
        let config = GameConfig::default();
        let mut screen = SettingsScreen::new(&config);
        screen.audio.master_volume = 0.3;
        screen.weather.auto_change = false;

        let edited = screen.edited_config();
        assert_eq!(edited.audio.master_volume, 0.3);
        assert!(!edited.weather.auto_change);
        assert_eq!(edited.camera, config.camera);
        assert_eq!(edited.display, config.display);
    }

    #[test]
    fn test_cancel_restores_original() {
        let config = GameConfig::default();
        let mut screen = SettingsScreen::new(&config);
        screen.audio.sfx_volume = 0.0;
        screen.has_changes = true;

        screen.cancel();
        assert_eq!(screen.audio, config.audio);
        assert!(!screen.has_changes);
    }
}
