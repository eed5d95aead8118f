//! Play session: one run of the side-scrolling play state.
//!
//! Owns the player, scenery, weather and camera for as long as the play state
//! lives. Dropping the session discards all of it, so weather and camera start
//! fresh every time play begins.

use glam::Vec2;

use super::camera::CameraController;
use super::player::Player;
use super::renderer::{DrawSurface, Rgb, TextAnchor};
use super::scene::{ObjectKind, StaticWorld};
use super::weather::{WeatherMode, WeatherSimulator};
use super::GameRng;
use crate::input::{keyboard::controls_hint, GameAction, InputState};
use crate::storage::config::GameConfig;

/// Camera shake applied when lightning strikes
const THUNDER_SHAKE_INTENSITY: f32 = 6.0;
const THUNDER_SHAKE_MS: f32 = 250.0;

/// Something the shell should react to (usually with a sound)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Footstep,
    Jumped,
    Interacted(ObjectKind),
    Lightning,
    WeatherChanged(WeatherMode),
}

/// Live state of the play screen.
#[derive(Debug)]
pub struct PlaySession {
    player: Player,
    world: StaticWorld,
    weather: WeatherSimulator,
    camera: CameraController,
    rng: GameRng,
    screen: Vec2,
    elapsed_ms: f64,
}

impl PlaySession {
    /// Build a fresh session for `player_name`, drawing all randomness from `rng`.
    pub fn new(config: &GameConfig, player_name: &str, mut rng: GameRng) -> Self {
        let width = config.display.width_f32();
        let height = config.display.height_f32();

        let world = StaticWorld::new(width, height, &mut rng);
        let spawn = Vec2::new(width / 2.0, world.ground_level() - 50.0);
        let player = Player::new(&config.player, spawn, width, player_name);
        let weather = WeatherSimulator::new(&config.weather, width, height, &mut rng);
        let camera = CameraController::new(&config.camera, width, height);

        tracing::info!(player = player_name, "Play session started");

        Self {
            player,
            world,
            weather,
            camera,
            rng,
            screen: Vec2::new(width, height),
            elapsed_ms: 0.0,
        }
    }

    /// Apply one frame of input and advance the simulation by `dt_ms`.
    pub fn update(&mut self, dt_ms: f32, input: &InputState) -> Vec<SessionEvent> {
        let dt = dt_ms.max(0.0);
        let mut events = Vec::new();

        if input.was_pressed(GameAction::Jump) && self.player.jump() {
            events.push(SessionEvent::Jumped);
        }
        if input.was_pressed(GameAction::Interact) {
            if let Some(kind) = self.world.interact(self.player.position) {
                tracing::debug!("Interacted with {}", kind);
                events.push(SessionEvent::Interacted(kind));
            }
        }
        let overrides = [
            (GameAction::WeatherClear, WeatherMode::Clear),
            (GameAction::WeatherRain, WeatherMode::Rain),
            (GameAction::WeatherStorm, WeatherMode::Storm),
        ];
        for (action, mode) in overrides {
            if input.was_pressed(action) {
                self.weather.set_weather(mode);
            }
        }

        self.player.set_running(input.is_held(GameAction::Run));
        if input.is_held(GameAction::MoveLeft) && self.player.move_left(dt) {
            events.push(SessionEvent::Footstep);
        }
        if input.is_held(GameAction::MoveRight) && self.player.move_right(dt) {
            events.push(SessionEvent::Footstep);
        }

        self.player.update(dt, self.world.ground_level());

        let weather_events = self.weather.update(dt, &mut self.rng);
        if let Some(mode) = weather_events.mode_changed {
            events.push(SessionEvent::WeatherChanged(mode));
        }
        if weather_events.lightning_struck {
            self.camera.shake(THUNDER_SHAKE_INTENSITY, THUNDER_SHAKE_MS);
            events.push(SessionEvent::Lightning);
        }

        self.camera.update(dt, self.player.position);
        self.elapsed_ms += dt as f64;

        events
    }

    /// Draw sky, scenery, player and weather for the current frame.
    pub fn render(&mut self, surface: &mut dyn DrawSurface) {
        surface.fill(self.weather.sky_color().into());

        let offset = self.camera.offset(&mut self.rng);
        self.world.render(surface, offset.x);
        self.player.render(surface, offset);
        self.weather.render(surface, &mut self.rng);
    }

    /// Draw the heads-up display: name, weather, FPS, position and controls.
    pub fn render_hud(&self, surface: &mut dyn DrawSurface, fps: f32) {
        let white = Rgb::WHITE.into();
        let (w, h) = (self.screen.x, self.screen.y);

        surface.text(
            Vec2::new(10.0, 10.0),
            TextAnchor::TopLeft,
            &format!("Player: {}", self.player.name),
            20.0,
            white,
        );
        surface.text(
            Vec2::new(10.0, 50.0),
            TextAnchor::TopLeft,
            &format!("Weather: {}", self.weather.mode()),
            20.0,
            white,
        );
        surface.text(
            Vec2::new(w - 10.0, 10.0),
            TextAnchor::TopRight,
            &format!("FPS: {}", fps.round() as i32),
            20.0,
            white,
        );
        surface.text(
            Vec2::new(w - 10.0, 35.0),
            TextAnchor::TopRight,
            &format!("X: {}", self.player.position.x as i32),
            20.0,
            white,
        );
        surface.text(
            Vec2::new(10.0, h - 30.0),
            TextAnchor::TopLeft,
            &controls_hint(),
            16.0,
            white,
        );
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> &StaticWorld {
        &self.world
    }

    pub fn weather(&self) -> &WeatherSimulator {
        &self.weather
    }

    pub fn weather_mut(&mut self) -> &mut WeatherSimulator {
        &mut self.weather
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Logical canvas size
    pub fn screen_size(&self) -> Vec2 {
        self.screen
    }

    /// Simulated time since the session started
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }
}
