//! Side-scrolling follow camera

use glam::Vec2;

use super::GameRng;
use crate::storage::config::CameraConfig;

/// Camera that keeps its target inside a dead zone.
///
/// The offset is added to world coordinates to get screen coordinates, so it is
/// non-positive on both axes: `x` in `[-screen_width, 0]` and `y` in
/// `[-max_vertical_offset, 0]`.
#[derive(Debug, Clone)]
pub struct CameraController {
    /// Offset before shake is applied
    offset: Vec2,
    /// Maximum shake displacement per axis
    shake_intensity: f32,
    /// Milliseconds of shake left
    shake_remaining: f32,
    /// Logical screen size
    screen: Vec2,
    /// Dead-zone width and height
    dead_zone: Vec2,
    /// Horizontal smoothing factor
    follow_speed: f32,
    max_vertical_offset: f32,
}

impl CameraController {
    pub fn new(config: &CameraConfig, screen_width: f32, screen_height: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            shake_intensity: 0.0,
            shake_remaining: 0.0,
            screen: Vec2::new(screen_width, screen_height),
            dead_zone: Vec2::new(config.dead_zone_width, config.dead_zone_height),
            follow_speed: config.follow_speed.clamp(0.0, 1.0),
            max_vertical_offset: config.max_vertical_offset.max(0.0),
        }
    }

    /// Follow `target` (world position) and advance any shake by `dt_ms`.
    pub fn update(&mut self, dt_ms: f32, target: Vec2) {
        let center = self.screen / 2.0;
        let target_offset = center - target;
        let camera_center = center - self.offset;
        let half_zone = self.dead_zone / 2.0;

        if target.x < camera_center.x - half_zone.x {
            self.offset.x = -(target.x - center.x + half_zone.x);
        } else if target.x > camera_center.x + half_zone.x {
            self.offset.x = -(target.x - center.x - half_zone.x);
        }

        // Vertical follow only snaps to the dead-zone edge; it is not smoothed.
        if target.y < camera_center.y - half_zone.y {
            self.offset.y = -(target.y - center.y + half_zone.y);
        } else if target.y > camera_center.y + half_zone.y {
            self.offset.y = -(target.y - center.y - half_zone.y);
        }

        let k = self.follow_speed;
        self.offset.x = self.offset.x * (1.0 - k) + target_offset.x * k;

        self.offset.x = self.offset.x.clamp(-self.screen.x, 0.0);
        self.offset.y = self.offset.y.clamp(-self.max_vertical_offset, 0.0);

        if self.is_shaking() {
            self.shake_remaining -= dt_ms.max(0.0);
            if self.shake_remaining <= 0.0 {
                self.shake_intensity = 0.0;
                self.shake_remaining = 0.0;
            }
        }
    }

    /// Start a shake, replacing any shake already in progress.
    pub fn shake(&mut self, intensity: f32, duration_ms: f32) {
        tracing::debug!(intensity, duration_ms, "Camera shake");
        self.shake_intensity = intensity.max(0.0);
        self.shake_remaining = duration_ms;
    }

    /// Offset to apply this draw call, including fresh shake jitter.
    pub fn offset(&self, rng: &mut GameRng) -> Vec2 {
        if !self.is_shaking() {
            return self.offset;
        }
        let i = self.shake_intensity;
        self.offset + Vec2::new(rng.range_f32_inclusive(-i, i), rng.range_f32_inclusive(-i, i))
    }

    /// Offset without shake
    pub fn base_offset(&self) -> Vec2 {
        self.offset
    }

    pub fn is_shaking(&self) -> bool {
        self.shake_intensity > 0.0
    }

    pub fn world_to_screen(&self, world: Vec2, rng: &mut GameRng) -> Vec2 {
        world + self.offset(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> CameraController {
        CameraController::new(&CameraConfig::default(), 1280.0, 720.0)
    }

    #[test]
    fn test_centered_target_keeps_camera_still() {
        let mut cam = camera();
        cam.update(16.0, Vec2::new(640.0, 360.0));
        assert_eq!(cam.base_offset(), Vec2::ZERO);
    }

    #[test]
    fn test_right_of_dead_zone_scrolls_left() {
        let mut cam = camera();
        cam.update(16.0, Vec2::new(1000.0, 360.0));

        // Snap puts the target on the right edge (offset -260), then one smoothing
        // step toward -360.
        assert!((cam.base_offset().x - -270.0).abs() < 1e-3);
        assert_eq!(cam.base_offset().y, 0.0);
    }

    #[test]
    fn test_vertical_snap_is_clamped() {
        let mut cam = camera();
        cam.update(16.0, Vec2::new(640.0, 2000.0));
        assert_eq!(cam.base_offset().y, -200.0);

        cam.update(16.0, Vec2::new(640.0, -500.0));
        assert_eq!(cam.base_offset().y, 0.0);
    }

    #[test]
    fn test_shake_expires() {
        let mut cam = camera();
        cam.shake(5.0, 30.0);
        assert!(cam.is_shaking());

        cam.update(16.0, Vec2::new(640.0, 360.0));
        assert!(cam.is_shaking());
        cam.update(16.0, Vec2::new(640.0, 360.0));
        assert!(!cam.is_shaking());
    }

    #[test]
    fn test_shake_overwrites_previous() {
        let mut cam = camera();
        cam.shake(10.0, 1000.0);
        cam.shake(2.0, 10.0);

        cam.update(16.0, Vec2::new(640.0, 360.0));
        assert!(!cam.is_shaking());
    }

    #[test]
    fn test_zero_length_shake_ends_on_next_update() {
        let mut cam = camera();
        cam.shake(4.0, 0.0);
        cam.update(16.0, Vec2::new(640.0, 360.0));
        assert!(!cam.is_shaking());

        cam.shake(4.0, -100.0);
        cam.update(0.0, Vec2::new(640.0, 360.0));
        assert!(!cam.is_shaking());
    }
}
