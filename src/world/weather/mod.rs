//! Weather simulation for the play view.
//!
//! A three-state machine (clear, rain, storm) that drifts rain intensity and
//! wind toward per-mode targets, fires lightning during storms and animates a
//! fixed pool of rain particles.

pub mod particles;
pub mod skybox;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::renderer::{DrawSurface, Rgb};
use super::GameRng;
use crate::storage::config::WeatherConfig;
use particles::{RainParticle, RainPool};

pub use skybox::sky_color;

/// Color of rain streaks
pub const RAIN_COLOR: Rgb = Rgb::new(173, 216, 230);
/// Color of the lightning flash and bolt
pub const LIGHTNING_COLOR: Rgb = Rgb::WHITE;

/// Alpha of the full-screen flash while lightning is active
const FLASH_ALPHA: u8 = 100;
/// Chance per render call that an active flash also shows a bolt
const BOLT_CHANCE: f64 = 0.3;
/// Bounds for the randomly drawn time between lightning strikes
const LIGHTNING_INTERVAL_MS: (i32, i32) = (2000, 8000);

/// Weather mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeatherMode {
    #[default]
    Clear,
    Rain,
    Storm,
}

impl WeatherMode {
    pub const ALL: [WeatherMode; 3] = [WeatherMode::Clear, WeatherMode::Rain, WeatherMode::Storm];

    /// Parse the lowercase mode name; anything else is `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "clear" => Some(Self::Clear),
            "rain" => Some(Self::Rain),
            "storm" => Some(Self::Storm),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Rain => "rain",
            Self::Storm => "storm",
        }
    }

    /// Title-case label for the HUD
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Rain => "Rain",
            Self::Storm => "Storm",
        }
    }

    /// Relative weight when a mode is rolled automatically
    pub fn weight(&self) -> f32 {
        match self {
            Self::Clear => 0.5,
            Self::Rain => 0.3,
            Self::Storm => 0.2,
        }
    }

    /// Per-millisecond intensity rate and ceiling (a negative rate decays to 0)
    fn intensity_target(&self) -> (f32, f32) {
        match self {
            Self::Clear => (-0.0001, 0.0),
            Self::Rain => (0.0001, 0.7),
            Self::Storm => (0.0002, 1.0),
        }
    }

    /// Per-millisecond wind rate and ceiling
    fn wind_target(&self) -> (f32, f32) {
        match self {
            Self::Clear => (-0.00005, 0.0),
            Self::Rain => (0.00005, 0.3),
            Self::Storm => (0.0001, 1.0),
        }
    }

    /// Weighted random pick across all modes
    fn roll(rng: &mut GameRng) -> Self {
        let total: f32 = Self::ALL.iter().map(|m| m.weight()).sum();
        let mut roll = rng.unit() * total;
        for mode in Self::ALL {
            if roll < mode.weight() {
                return mode;
            }
            roll -= mode.weight();
        }
        Self::Storm
    }
}

impl std::fmt::Display for WeatherMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What happened during one [`WeatherSimulator::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeatherEvents {
    /// Set when the automatic roll landed on a different mode
    pub mode_changed: Option<WeatherMode>,
    /// Set when a lightning strike started this update
    pub lightning_struck: bool,
}

/// Move `value` by `rate * dt` and keep it within `[0, ceiling]`.
fn approach(value: f32, rate: f32, ceiling: f32, dt: f32) -> f32 {
    if rate < 0.0 {
        (value + rate * dt).max(0.0)
    } else {
        (value + rate * dt).min(ceiling).max(0.0)
    }
}

/// Weather state machine plus its particle pool.
#[derive(Debug, Clone)]
pub struct WeatherSimulator {
    mode: WeatherMode,
    rain_intensity: f32,
    wind_strength: f32,
    wind_direction: f32,
    mode_timer: f32,
    lightning_timer: f32,
    lightning_threshold: f32,
    lightning_active: bool,
    lightning_remaining: f32,
    rain: RainPool,
    size: Vec2,
    change_interval_ms: f32,
    lightning_duration_ms: f32,
    auto_change: bool,
}

impl WeatherSimulator {
    /// Create a clear-sky simulator for a `width` by `height` screen.
    pub fn new(config: &WeatherConfig, width: f32, height: f32, rng: &mut GameRng) -> Self {
        let rain = RainPool::new(config.rain_particles, width, height, rng);
        let lightning_threshold = Self::draw_lightning_threshold(rng);

        tracing::debug!(
            particles = rain.len(),
            auto_change = config.auto_change,
            "Weather simulator created"
        );

        Self {
            mode: WeatherMode::Clear,
            rain_intensity: 0.0,
            wind_strength: 0.0,
            wind_direction: 1.0,
            mode_timer: 0.0,
            lightning_timer: 0.0,
            lightning_threshold,
            lightning_active: false,
            lightning_remaining: 0.0,
            rain,
            size: Vec2::new(width, height),
            change_interval_ms: config.change_interval_ms,
            lightning_duration_ms: config.lightning_duration_ms,
            auto_change: config.auto_change,
        }
    }

    fn draw_lightning_threshold(rng: &mut GameRng) -> f32 {
        rng.range_i32(LIGHTNING_INTERVAL_MS.0, LIGHTNING_INTERVAL_MS.1) as f32
    }

    /// Switch mode immediately. Intensity and wind then drift toward the new
    /// targets over subsequent updates.
    pub fn set_weather(&mut self, mode: WeatherMode) {
        if mode != self.mode {
            tracing::info!("Weather set to {}", mode);
        }
        self.mode = mode;
    }

    /// Switch mode by lowercase name; unknown names are ignored.
    pub fn set_weather_by_name(&mut self, name: &str) {
        match WeatherMode::from_name(name) {
            Some(mode) => self.set_weather(mode),
            None => tracing::debug!("Ignoring unknown weather mode {:?}", name),
        }
    }

    /// Enable or disable the periodic automatic weather roll.
    pub fn set_auto_change(&mut self, enabled: bool) {
        self.auto_change = enabled;
    }

    /// Advance the simulation by `dt_ms` milliseconds.
    pub fn update(&mut self, dt_ms: f32, rng: &mut GameRng) -> WeatherEvents {
        let dt = dt_ms.max(0.0);
        let mut events = WeatherEvents::default();

        if self.auto_change {
            self.mode_timer += dt;
            if self.mode_timer > self.change_interval_ms {
                let next = WeatherMode::roll(rng);
                if next != self.mode {
                    tracing::info!("Weather changed from {} to {}", self.mode, next);
                    events.mode_changed = Some(next);
                }
                self.mode = next;
                self.mode_timer = 0.0;
            }
        }

        let (rate, ceiling) = self.mode.intensity_target();
        self.rain_intensity = approach(self.rain_intensity, rate, ceiling, dt);
        let (rate, ceiling) = self.mode.wind_target();
        self.wind_strength = approach(self.wind_strength, rate, ceiling, dt);

        if self.mode == WeatherMode::Storm {
            self.lightning_timer += dt;
            if self.lightning_timer > self.lightning_threshold {
                tracing::debug!(after_ms = self.lightning_timer, "Lightning strike");
                self.lightning_active = true;
                self.lightning_remaining = self.lightning_duration_ms;
                self.lightning_timer = 0.0;
                self.lightning_threshold = Self::draw_lightning_threshold(rng);
                events.lightning_struck = true;
            }
        }

        if self.rain_intensity > 0.0 {
            let drift = self.wind_strength * self.wind_direction;
            self.rain.update(dt, self.rain_intensity, drift, rng);
        }

        // Decays regardless of mode, so a flash outlives a switch away from storm.
        if self.lightning_active {
            self.lightning_remaining -= dt;
            if self.lightning_remaining <= 0.0 {
                self.lightning_active = false;
            }
        }

        events
    }

    /// Draw rain and lightning onto `surface` without touching simulation state.
    pub fn render(&self, surface: &mut dyn DrawSurface, rng: &mut GameRng) {
        let (width, height) = (self.size.x, self.size.y);

        if self.rain_intensity > 0.0 {
            let slant = self.wind_strength * 5.0;
            for p in self.rain.particles() {
                if !p.is_on_screen(width, height) {
                    continue;
                }
                let alpha = (p.base_alpha as f32 * self.rain_intensity) as u8;
                if alpha == 0 {
                    continue;
                }
                surface.line(
                    Vec2::new(p.x, p.y),
                    Vec2::new(p.x - slant, p.y + p.streak_length as f32),
                    2.0,
                    RAIN_COLOR.with_alpha(alpha),
                );
            }
        }

        if self.lightning_active {
            surface.fill(LIGHTNING_COLOR.with_alpha(FLASH_ALPHA));

            if rng.chance(BOLT_CHANCE) {
                let bolt = Self::bolt_points(width, height, rng);
                surface.polyline(&bolt, 3.0, LIGHTNING_COLOR.into());
            }
        }
    }

    /// Jagged path from the top edge down to mid-screen.
    fn bolt_points(width: f32, height: f32, rng: &mut GameRng) -> Vec<Vec2> {
        let (min_x, max_x) = (50, (width as i32 - 50).max(50));
        let start_x = rng.range_i32(100, width as i32 - 100);

        let mut points = vec![Vec2::new(start_x as f32, 0.0)];
        let mut x = start_x;
        for y in (0..(height as i32) / 2).step_by(20) {
            x = (x + rng.range_i32(-30, 30)).clamp(min_x, max_x);
            points.push(Vec2::new(x as f32, y as f32));
        }
        points
    }

    /// Current sky background color
    pub fn sky_color(&self) -> Rgb {
        sky_color(self.mode, self.rain_intensity)
    }

    pub fn mode(&self) -> WeatherMode {
        self.mode
    }

    pub fn rain_intensity(&self) -> f32 {
        self.rain_intensity
    }

    pub fn wind_strength(&self) -> f32 {
        self.wind_strength
    }

    pub fn wind_direction(&self) -> f32 {
        self.wind_direction
    }

    pub fn is_lightning_active(&self) -> bool {
        self.lightning_active
    }

    pub fn particles(&self) -> &[RainParticle] {
        self.rain.particles()
    }
}
