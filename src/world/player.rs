//! Player character physics and drawing

use glam::Vec2;

use super::renderer::{palette, DrawSurface, Rect, Rgb, TextAnchor};
use crate::storage::config::PlayerConfig;

/// Player sprite width in pixels
pub const PLAYER_WIDTH: f32 = 32.0;
/// Player sprite height in pixels
pub const PLAYER_HEIGHT: f32 = 48.0;

/// Frames in the walk cycle
const WALK_FRAMES: u8 = 4;
/// Milliseconds per walk-cycle frame
const WALK_FRAME_MS: f32 = 200.0;
/// Footstep cadence when walking and running
const FOOTSTEP_WALK_MS: f32 = 300.0;
const FOOTSTEP_RUN_MS: f32 = 200.0;
const FRICTION: f32 = 0.8;

/// The controllable character.
///
/// Position is the top-left corner of the sprite in world pixels. Velocities
/// are in pixels per tenth of a millisecond, matching the `dt * 0.1` step.
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner in world space
    pub position: Vec2,
    /// Current velocity
    pub velocity: Vec2,
    /// Display name drawn above the head
    pub name: String,
    speed: f32,
    run_speed: f32,
    jump_strength: f32,
    gravity: f32,
    running: bool,
    on_ground: bool,
    facing_right: bool,
    animation_frame: u8,
    animation_timer: f32,
    footstep_timer: f32,
    /// Right-most x the player may reach
    max_x: f32,
}

impl Player {
    /// Create a player at `spawn`, confined to `[0, 2 * screen_width - width]`.
    pub fn new(config: &PlayerConfig, spawn: Vec2, screen_width: f32, name: impl Into<String>) -> Self {
        Self {
            position: spawn,
            velocity: Vec2::ZERO,
            name: name.into(),
            speed: config.speed,
            run_speed: config.run_speed,
            jump_strength: config.jump_strength,
            gravity: config.gravity,
            running: false,
            on_ground: false,
            facing_right: true,
            animation_frame: 0,
            animation_timer: 0.0,
            footstep_timer: 0.0,
            max_x: (screen_width * 2.0 - PLAYER_WIDTH).max(0.0),
        }
    }

    fn current_speed(&self) -> f32 {
        if self.running {
            self.run_speed
        } else {
            self.speed
        }
    }

    /// Push left for this frame. Returns `true` when a footstep lands.
    pub fn move_left(&mut self, dt_ms: f32) -> bool {
        self.velocity.x = -self.current_speed();
        self.facing_right = false;
        self.advance_footstep(dt_ms)
    }

    /// Push right for this frame. Returns `true` when a footstep lands.
    pub fn move_right(&mut self, dt_ms: f32) -> bool {
        self.velocity.x = self.current_speed();
        self.facing_right = true;
        self.advance_footstep(dt_ms)
    }

    fn advance_footstep(&mut self, dt_ms: f32) -> bool {
        if !self.on_ground {
            return false;
        }
        self.footstep_timer += dt_ms;
        let interval = if self.running {
            FOOTSTEP_RUN_MS
        } else {
            FOOTSTEP_WALK_MS
        };
        if self.footstep_timer > interval {
            self.footstep_timer = 0.0;
            true
        } else {
            false
        }
    }

    /// Jump if standing on the ground. Returns whether the jump happened.
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.velocity.y = -self.jump_strength;
        self.on_ground = false;
        true
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Integrate one frame against a flat ground at `ground_level`.
    pub fn update(&mut self, dt_ms: f32, ground_level: f32) {
        let dt = dt_ms.max(0.0);

        if !self.on_ground {
            self.velocity.y += self.gravity;
        }

        self.position += self.velocity * dt * 0.1;

        let floor = ground_level - PLAYER_HEIGHT;
        if self.position.y >= floor {
            self.position.y = floor;
            self.velocity.y = 0.0;
            self.on_ground = true;
        } else {
            self.on_ground = false;
        }

        self.position.x = self.position.x.clamp(0.0, self.max_x);

        self.velocity.x *= FRICTION;

        if self.velocity.x.abs() > 0.1 {
            self.animation_timer += dt;
            if self.animation_timer > WALK_FRAME_MS {
                self.animation_frame = (self.animation_frame + 1) % WALK_FRAMES;
                self.animation_timer = 0.0;
            }
        } else {
            self.animation_frame = 0;
        }
    }

    /// Collision rectangle in world space
    pub fn rect(&self) -> Rect {
        Rect::from_xywh(self.position.x, self.position.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    pub fn is_on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn animation_frame(&self) -> u8 {
        self.animation_frame
    }

    /// Draw the player translated by the camera `offset`.
    pub fn render(&self, surface: &mut dyn DrawSurface, offset: Vec2) {
        let screen = self.position + offset;
        if screen.x < -50.0 || screen.x > surface.size().x + 50.0 {
            return;
        }

        let rect = Rect::from_xywh(screen.x, screen.y, PLAYER_WIDTH, PLAYER_HEIGHT);
        if !surface.sprite(rect, !self.facing_right) {
            Self::draw_default_figure(surface, screen);
        }

        if !self.name.is_empty() {
            surface.text(
                Vec2::new(screen.x + PLAYER_WIDTH / 2.0, screen.y - 10.0),
                TextAnchor::Center,
                &self.name,
                20.0,
                Rgb::WHITE.into(),
            );
        }
    }

    /// Primitive stand-in used when no avatar image exists.
    fn draw_default_figure(surface: &mut dyn DrawSurface, origin: Vec2) {
        let at = |x: f32, y: f32, w: f32, h: f32| Rect::from_xywh(origin.x + x, origin.y + y, w, h);
        let mid = PLAYER_WIDTH / 2.0;

        surface.fill_rect(at(0.0, 0.0, PLAYER_WIDTH, PLAYER_HEIGHT), palette::BLUE.into());
        surface.fill_circle(origin + Vec2::new(mid, 12.0), 8.0, palette::LIGHT_GRAY.into());
        surface.fill_rect(at(mid - 8.0, 20.0, 16.0, 20.0), palette::RED.into());
        surface.fill_rect(at(mid - 6.0, 40.0, 5.0, 8.0), palette::DARK_GRAY.into());
        surface.fill_rect(at(mid + 1.0, 40.0, 5.0, 8.0), palette::DARK_GRAY.into());
    }
}
