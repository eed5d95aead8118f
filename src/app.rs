//! Main application state and egui integration.
//!
//! Owns configuration, the player save, audio and every screen, and moves
//! between screens as they request it.

use eframe::egui;
use std::path::Path;

use stormrunner::audio::{AudioManager, MusicTrack};
use stormrunner::storage::config::{self, GameConfig};
use stormrunner::storage::save::{PlayerData, SaveManager};
use stormrunner::ui::screens::{
    AvatarAction, AvatarCreationScreen, MainMenuScreen, MenuChoice, PlayAction, PlayScreen,
    Screen, SettingsAction, SettingsScreen,
};
use stormrunner::ui::theme::StormTheme;
use stormrunner::world::avatar::FilePhotoSource;
use stormrunner::world::{GameRng, PlaySession};

/// Directory searched for music tracks
const AUDIO_ASSETS_DIR: &str = "assets/audio";
/// Longest frame step fed to the simulation, in milliseconds
const MAX_FRAME_MS: f32 = 250.0;

/// Main application state.
pub struct StormRunnerApp {
    /// Current screen
    current_screen: Screen,
    /// Game configuration
    config: GameConfig,
    /// Player save location
    saves: SaveManager,
    /// Loaded player profile
    player_data: PlayerData,
    /// Sound effects and music
    audio: AudioManager,
    /// Randomness for the menu background
    rng: GameRng,
    main_menu: MainMenuScreen,
    settings_screen: SettingsScreen,
    /// Present only while creating an avatar
    avatar_screen: Option<AvatarCreationScreen>,
    /// Present while playing or paused
    play_screen: Option<PlayScreen>,
    /// Set once the player data has been written on the way out
    saved_on_exit: bool,
}

impl StormRunnerApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        cc.egui_ctx.set_visuals(StormTheme::visuals());

        let saves = SaveManager::new(config.saves_dir());
        let player_data = saves.load();
        let audio = AudioManager::new(&config.audio, AUDIO_ASSETS_DIR);

        let mut rng = GameRng::from_entropy();
        let main_menu = MainMenuScreen::new(
            config.display.width_f32(),
            config.display.height_f32(),
            &mut rng,
        );
        let settings_screen = SettingsScreen::new(&config);

        let mut app = Self {
            current_screen: Screen::MainMenu,
            config,
            saves,
            player_data,
            audio,
            rng,
            main_menu,
            settings_screen,
            avatar_screen: None,
            play_screen: None,
            saved_on_exit: false,
        };
        app.play_music(MusicTrack::Menu);

        tracing::info!("StormRunner initialized");
        app
    }

    fn play_music(&mut self, track: MusicTrack) {
        if let Err(e) = self.audio.play_music(track) {
            tracing::debug!("Music {} unavailable: {}", track.name(), e);
        }
    }

    /// Navigate to a screen.
    fn navigate(&mut self, screen: Screen) {
        let from = self.current_screen;
        tracing::debug!("Navigating from {} to {}", from.name(), screen.name());

        match screen {
            Screen::MainMenu => {
                self.play_screen = None;
                self.avatar_screen = None;
                self.main_menu.reset(&mut self.rng);
                self.play_music(MusicTrack::Menu);
            }
            Screen::AvatarCreation => {
                self.avatar_screen = Some(AvatarCreationScreen::new(
                    Box::new(FilePhotoSource::new()),
                    &self.player_data,
                ));
            }
            Screen::Playing if screen.starts_session(from) || self.play_screen.is_none() => {
                let session = PlaySession::new(
                    &self.config,
                    &self.player_data.player_name,
                    GameRng::from_entropy(),
                );
                let avatar = self.player_data.existing_avatar().map(Path::to_path_buf);
                self.play_screen = Some(PlayScreen::new(session, avatar));
                self.avatar_screen = None;
                self.play_music(MusicTrack::Game);
            }
            Screen::Playing => self.audio.resume_music(),
            Screen::Paused => self.audio.pause_music(),
            Screen::Settings => self.settings_screen.reset(&self.config),
        }

        self.current_screen = screen;
    }

    fn save_player_data(&mut self) {
        if let Err(e) = self.saves.save(&mut self.player_data) {
            tracing::warn!("Failed to save player data: {}", e);
        }
    }

    fn quit(&mut self, ctx: &egui::Context) {
        tracing::info!("Quitting StormRunner");
        self.save_player_data();
        self.saved_on_exit = true;
        self.audio.stop_music();
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn apply_settings(&mut self, config: GameConfig) {
        match config::save_config(&config) {
            Ok(()) => {
                self.audio.apply_settings(&config.audio);
                self.config = config;
                self.navigate(Screen::MainMenu);
            }
            Err(e) => {
                tracing::warn!("Failed to save settings: {}", e);
                self.settings_screen.error_message = Some(format!("Failed to save: {}", e));
            }
        }
    }

    fn show_main_menu(&mut self, ui: &mut egui::Ui, dt_ms: f32) {
        let choice = self
            .main_menu
            .show(ui, dt_ms, &mut self.rng, &self.audio);

        match choice {
            Some(MenuChoice::Start) if self.player_data.has_avatar => self.navigate(Screen::Playing),
            Some(MenuChoice::Start) => self.navigate(Screen::AvatarCreation),
            Some(MenuChoice::Settings) => self.navigate(Screen::Settings),
            Some(MenuChoice::Quit) => self.quit(ui.ctx()),
            None => {}
        }
    }

    fn show_play(&mut self, ui: &mut egui::Ui, dt_ms: f32, paused: bool) {
        let Some(play) = self.play_screen.as_mut() else {
            self.navigate(Screen::MainMenu);
            return;
        };

        let action = play.show(ui, dt_ms, paused, &self.audio);
        match action {
            Some(PlayAction::Pause) => self.navigate(Screen::Paused),
            Some(PlayAction::Resume) => self.navigate(Screen::Playing),
            Some(PlayAction::MainMenu) => self.navigate(Screen::MainMenu),
            None => {}
        }
    }
}

impl eframe::App for StormRunnerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Game screens animate every frame
        ctx.request_repaint();

        let dt_ms = (ctx.input(|i| i.stable_dt) * 1000.0).clamp(0.0, MAX_FRAME_MS);

        if ctx.input(|i| i.viewport().close_requested()) && !self.saved_on_exit {
            self.save_player_data();
            self.saved_on_exit = true;
        }

        let canvas = matches!(
            self.current_screen,
            Screen::MainMenu | Screen::Playing | Screen::Paused
        );
        let frame = if canvas {
            egui::Frame::NONE.fill(egui::Color32::BLACK)
        } else {
            egui::Frame::central_panel(&ctx.style())
        };

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            match self.current_screen {
                Screen::MainMenu => self.show_main_menu(ui, dt_ms),
                Screen::AvatarCreation => {
                    let action = match self.avatar_screen.as_mut() {
                        Some(screen) => {
                            screen.show(ui, &self.audio, &self.saves, &mut self.player_data)
                        }
                        None => Some(AvatarAction::Back),
                    };
                    match action {
                        Some(AvatarAction::Confirmed) => self.navigate(Screen::Playing),
                        Some(AvatarAction::Back) => self.navigate(Screen::MainMenu),
                        None => {}
                    }
                }
                Screen::Playing => self.show_play(ui, dt_ms, false),
                Screen::Paused => self.show_play(ui, dt_ms, true),
                Screen::Settings => match self.settings_screen.show(ui) {
                    Some(SettingsAction::Save(config)) => self.apply_settings(config),
                    Some(SettingsAction::Cancel) => self.navigate(Screen::MainMenu),
                    None => {}
                },
            }
        });
    }
}
