//! UI screens for the game.

pub mod avatar;
pub mod main_menu;
pub mod play;
pub mod settings;

pub use avatar::{AvatarAction, AvatarCreationScreen};
pub use main_menu::{MainMenuScreen, MenuChoice};
pub use play::{PauseOverlay, PlayAction, PlayScreen};
pub use settings::{SettingsAction, SettingsScreen};

/// Screen navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Title menu
    #[default]
    MainMenu,
    /// Photo capture and avatar customization
    AvatarCreation,
    /// Running game
    Playing,
    /// Game frozen under the pause overlay
    Paused,
    /// Volume and weather settings
    Settings,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::MainMenu => "main_menu",
            Screen::AvatarCreation => "avatar_creation",
            Screen::Playing => "playing",
            Screen::Paused => "paused",
            Screen::Settings => "settings",
        }
    }

    /// Whether arriving here from `from` starts a new play session
    pub fn starts_session(&self, from: Screen) -> bool {
        *self == Screen::Playing && from != Screen::Paused
    }
}
