//! Side-scrolling game world
//!
//! Window-independent simulation for the play state: player physics, the static
//! scenery, the weather simulator and the follow camera. Everything here draws
//! through [`renderer::DrawSurface`] and takes randomness from [`GameRng`], so a
//! whole play session can be driven headless from tests.

pub mod avatar;
pub mod camera;
pub mod player;
pub mod renderer;
pub mod scene;
pub mod session;
pub mod weather;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use camera::CameraController;
pub use player::Player;
pub use renderer::{DrawList, DrawSurface, Rect, Rgb, Rgba};
pub use scene::StaticWorld;
pub use session::{PlaySession, SessionEvent};
pub use weather::{WeatherEvents, WeatherMode, WeatherSimulator};

/// Seedable random source shared by every world component.
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Seed from operating system entropy
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Uniform float in `[low, high)`; returns `low` for an empty range
    pub fn range_f32(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        self.0.gen_range(low..high)
    }

    /// Uniform float in `[low, high]`
    pub fn range_f32_inclusive(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        self.0.gen_range(low..=high)
    }

    /// Uniform integer in `[low, high]`
    pub fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.0.gen_range(low..=high)
    }

    /// `true` with probability `p`
    pub fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform float in `[0, 1)`
    pub fn unit(&mut self) -> f32 {
        self.0.gen()
    }
}

impl std::fmt::Debug for GameRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GameRng")
    }
}
