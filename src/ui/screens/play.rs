//! Play screen: the running game and its pause overlay.

use egui::{ColorImage, Key, Sense, TextureHandle, TextureOptions, Ui};
use glam::Vec2;
use std::path::PathBuf;

use crate::audio::{AudioManager, SoundEffect};
use crate::input::{GameAction, InputState};
use crate::ui::surface::EguiSurface;
use crate::ui::widgets::ButtonColumn;
use crate::world::avatar;
use crate::world::player::{PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::world::renderer::{DrawSurface, Rgb, TextAnchor};
use crate::world::{PlaySession, SessionEvent};

const PAUSE_OVERLAY_ALPHA: u8 = 128;

/// Requests the play screen makes of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAction {
    Pause,
    Resume,
    MainMenu,
}

/// Sound that accompanies a session event
pub fn event_sound(event: SessionEvent) -> Option<SoundEffect> {
    match event {
        SessionEvent::Footstep => Some(SoundEffect::Footstep),
        SessionEvent::Interacted(_) => Some(SoundEffect::Interaction),
        SessionEvent::Lightning => Some(SoundEffect::Thunder),
        SessionEvent::Jumped | SessionEvent::WeatherChanged(_) => None,
    }
}

/// Buttons and title drawn over the frozen game while paused.
#[derive(Debug)]
pub struct PauseOverlay {
    buttons: ButtonColumn,
}

impl PauseOverlay {
    const CHOICES: [PlayAction; 2] = [PlayAction::Resume, PlayAction::MainMenu];

    pub fn new(width: f32) -> Self {
        let buttons = ButtonColumn::stacked(
            &["Resume Game", "Main Menu"],
            width / 2.0,
            300.0,
            Vec2::new(200.0, 50.0),
            70.0,
        )
        .with_text_size(22.0);
        Self { buttons }
    }

    pub fn selected(&self) -> PlayAction {
        Self::CHOICES[self.buttons.selected()]
    }

    pub fn select_prev(&mut self) {
        self.buttons.select_prev();
    }

    pub fn select_next(&mut self) {
        self.buttons.select_next();
    }

    pub fn hover(&mut self, p: Vec2) {
        self.buttons.hover(p);
    }

    pub fn click(&mut self, p: Vec2) -> Option<PlayAction> {
        self.buttons.hit(p).map(|i| Self::CHOICES[i])
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        let size = surface.size();
        surface.fill(Rgb::BLACK.with_alpha(PAUSE_OVERLAY_ALPHA));
        surface.text(
            Vec2::new(size.x / 2.0, 200.0),
            TextAnchor::Center,
            "PAUSED",
            64.0,
            Rgb::WHITE.into(),
        );
        self.buttons.render(surface);
    }
}

/// Play screen state: the session plus presentation extras.
pub struct PlayScreen {
    session: PlaySession,
    avatar_path: Option<PathBuf>,
    avatar_texture: Option<TextureHandle>,
    avatar_loaded: bool,
    pause: PauseOverlay,
    fps: f32,
}

impl PlayScreen {
    pub fn new(session: PlaySession, avatar_path: Option<PathBuf>) -> Self {
        let width = session.screen_size().x;
        Self {
            session,
            avatar_path,
            avatar_texture: None,
            avatar_loaded: false,
            pause: PauseOverlay::new(width),
            fps: 60.0,
        }
    }

    pub fn session(&self) -> &PlaySession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut PlaySession {
        &mut self.session
    }

    /// Smoothed frames per second
    pub fn fps(&self) -> f32 {
        self.fps
    }

    fn track_fps(&mut self, dt_ms: f32) {
        if dt_ms > 0.0 {
            self.fps = self.fps * 0.9 + (1000.0 / dt_ms) * 0.1;
        }
    }

    fn ensure_avatar_texture(&mut self, ctx: &egui::Context) {
        if self.avatar_loaded {
            return;
        }
        self.avatar_loaded = true;

        let Some(path) = self.avatar_path.as_deref() else {
            return;
        };
        match avatar::load_sprite(path, PLAYER_WIDTH as u32, PLAYER_HEIGHT as u32) {
            Ok(sprite) => {
                let size = [sprite.width() as usize, sprite.height() as usize];
                let image = ColorImage::from_rgba_unmultiplied(size, sprite.as_raw());
                self.avatar_texture = Some(ctx.load_texture("avatar", image, TextureOptions::LINEAR));
                tracing::debug!("Loaded avatar sprite from {}", path.display());
            }
            Err(e) => tracing::warn!("Failed to load avatar sprite: {}", e),
        }
    }

    /// Step the session with this frame's input and play event sounds.
    pub fn step(&mut self, dt_ms: f32, input: &InputState, audio: &AudioManager) -> Option<PlayAction> {
        self.track_fps(dt_ms);

        if input.was_pressed(GameAction::TogglePause) {
            return Some(PlayAction::Pause);
        }

        for event in self.session.update(dt_ms, input) {
            if let Some(effect) = event_sound(event) {
                audio.play_sfx(effect);
            }
        }
        None
    }

    /// Run one frame of play (or of the pause overlay) inside `ui`.
    pub fn show(&mut self, ui: &mut Ui, dt_ms: f32, paused: bool, audio: &AudioManager) -> Option<PlayAction> {
        self.ensure_avatar_texture(ui.ctx());

        let input = ui.input(InputState::from_egui);
        let (up, down, activate) = ui.input(|i| {
            (
                i.key_pressed(Key::ArrowUp),
                i.key_pressed(Key::ArrowDown),
                i.key_pressed(Key::Enter),
            )
        });

        let size = self.session.screen_size();
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        painter.rect_filled(response.rect, 0.0, egui::Color32::BLACK);
        let canvas = EguiSurface::letterboxed(&painter, response.rect, size).screen_rect();
        let painter = painter.with_clip_rect(canvas);
        let mut surface = EguiSurface::letterboxed(&painter, response.rect, size)
            .with_sprite(self.avatar_texture.as_ref().map(|t| t.id()));

        let mut action = None;
        if paused {
            if input.was_pressed(GameAction::TogglePause) {
                action = Some(PlayAction::Resume);
            }
            if up {
                self.pause.select_prev();
            }
            if down {
                self.pause.select_next();
            }
            if activate {
                action = Some(self.pause.selected());
            }
            if let Some(pos) = response.hover_pos() {
                self.pause.hover(surface.to_game(pos));
            }
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    action = action.or_else(|| self.pause.click(surface.to_game(pos)));
                }
            }
            if action.is_some() {
                audio.play_sfx(SoundEffect::ButtonClick);
            }
        } else {
            action = self.step(dt_ms, &input, audio);
        }

        self.session.render(&mut surface);
        self.session.render_hud(&mut surface, self.fps);
        if paused {
            self.pause.render(&mut surface);
        }

        action
    }
}
