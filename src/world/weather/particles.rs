//! Fixed-size rain particle pool.

use crate::world::GameRng;

/// A single rain streak in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainParticle {
    pub x: f32,
    pub y: f32,
    pub fall_speed: f32,
    pub streak_length: i32,
    pub base_alpha: u8,
}

impl RainParticle {
    fn spawn(width: f32, height: f32, rng: &mut GameRng) -> Self {
        Self {
            x: rng.range_i32(0, width as i32) as f32,
            y: rng.range_i32(-(height as i32), 0) as f32,
            fall_speed: rng.range_f32(5.0, 15.0),
            streak_length: rng.range_i32(10, 20),
            base_alpha: rng.range_i32(100, 255) as u8,
        }
    }

    pub fn is_on_screen(&self, width: f32, height: f32) -> bool {
        (0.0..=width).contains(&self.x) && (0.0..=height).contains(&self.y)
    }
}

/// Rain particles recycled in place; the pool never grows or shrinks.
#[derive(Debug, Clone)]
pub struct RainPool {
    particles: Vec<RainParticle>,
    width: f32,
    height: f32,
}

impl RainPool {
    pub fn new(count: usize, width: f32, height: f32, rng: &mut GameRng) -> Self {
        let particles = (0..count)
            .map(|_| RainParticle::spawn(width, height, rng))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    /// Advance every particle by `dt_ms`.
    ///
    /// `drift` is the signed wind (strength times direction).
    pub fn update(&mut self, dt_ms: f32, rain_intensity: f32, drift: f32, rng: &mut GameRng) {
        let (width, height) = (self.width, self.height);

        for p in &mut self.particles {
            p.y += p.fall_speed * dt_ms * 0.1 * rain_intensity;
            p.x += drift * dt_ms * 0.05;

            if p.y > height {
                p.y = rng.range_i32(-50, -10) as f32;
                p.x = rng.range_i32(0, width as i32) as f32;
            }

            if p.x < -10.0 || p.x > width + 10.0 {
                p.x = rng.range_i32(0, width as i32) as f32;
            }
        }
    }

    pub fn particles(&self) -> &[RainParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_placement_ranges() {
        let mut rng = GameRng::new(3);
        let pool = RainPool::new(300, 1280.0, 720.0, &mut rng);

        assert_eq!(pool.len(), 300);
        for p in pool.particles() {
            assert!((0.0..=1280.0).contains(&p.x));
            assert!((-720.0..=0.0).contains(&p.y));
            assert!((5.0..15.0).contains(&p.fall_speed));
            assert!((10..=20).contains(&p.streak_length));
            assert!(p.base_alpha >= 100);
        }
    }

    #[test]
    fn test_fallen_particles_recycle_above_screen() {
        let mut rng = GameRng::new(11);
        let mut pool = RainPool::new(50, 1280.0, 720.0, &mut rng);

        pool.update(100_000.0, 1.0, 0.0, &mut rng);

        assert_eq!(pool.len(), 50);
        for p in pool.particles() {
            assert!((-50.0..=-10.0).contains(&p.y), "y = {}", p.y);
        }
    }

    #[test]
    fn test_zero_intensity_only_drifts() {
        let mut rng = GameRng::new(5);
        let mut pool = RainPool::new(10, 1280.0, 720.0, &mut rng);
        let before: Vec<f32> = pool.particles().iter().map(|p| p.y).collect();

        pool.update(16.0, 0.0, 0.0, &mut rng);

        let after: Vec<f32> = pool.particles().iter().map(|p| p.y).collect();
        assert_eq!(before, after);
    }

    fn assert_drifted_back_on_screen(drift: f32) {
        let mut rng = GameRng::new(21);
        let mut pool = RainPool::new(40, 1280.0, 720.0, &mut rng);
        let before: Vec<f32> = pool.particles().iter().map(|p| p.y).collect();

        pool.update(100_000.0, 0.0, drift, &mut rng);

        let after: Vec<f32> = pool.particles().iter().map(|p| p.y).collect();
        assert_eq!(before, after);
        for p in pool.particles() {
            assert!((0.0..=1280.0).contains(&p.x), "x = {}", p.x);
        }
    }

    #[test]
    fn test_wind_pushed_particles_reenter_from_the_right() {
        assert_drifted_back_on_screen(1.0);
    }

    #[test]
    fn test_wind_pushed_particles_reenter_from_the_left() {
        assert_drifted_back_on_screen(-1.0);
    }
}
