//! Camera clamps, smoothing and shake

use glam::Vec2;
use stormrunner::storage::config::CameraConfig;
use stormrunner::world::{CameraController, GameRng};

fn camera() -> CameraController {
    CameraController::new(&CameraConfig::default(), 1280.0, 720.0)
}

#[test]
fn test_offset_always_clamped() {
    let mut cam = camera();
    let targets = [
        Vec2::new(-5_000.0, -5_000.0),
        Vec2::new(5_000.0, 5_000.0),
        Vec2::new(640.0, 360.0),
        Vec2::new(2_000.0, -300.0),
        Vec2::new(0.0, 1_000.0),
    ];

    for target in targets {
        for _ in 0..30 {
            cam.update(16.0, target);
            let o = cam.base_offset();
            assert!((-1280.0..=0.0).contains(&o.x), "x {}", o.x);
            assert!((-200.0..=0.0).contains(&o.y), "y {}", o.y);
        }
    }
}

#[test]
fn test_offset_idempotent_without_shake() {
    let mut cam = camera();
    let mut rng = GameRng::new(1);
    cam.update(16.0, Vec2::new(1_000.0, 360.0));

    let first = cam.offset(&mut rng);
    let second = cam.offset(&mut rng);
    assert_eq!(first, second);
    assert_eq!(first, cam.base_offset());
}

#[test]
fn test_shake_stays_within_intensity() {
    let mut cam = camera();
    let mut rng = GameRng::new(2);
    cam.update(16.0, Vec2::new(1_000.0, 360.0));
    cam.shake(5.0, 300.0);

    let base = cam.base_offset();
    for _ in 0..100 {
        let o = cam.offset(&mut rng);
        assert!((o.x - base.x).abs() <= 5.0);
        assert!((o.y - base.y).abs() <= 5.0);
    }
}

#[test]
fn test_shake_ends_after_duration() {
    let mut cam = camera();
    let target = Vec2::new(640.0, 360.0);
    cam.shake(5.0, 100.0);
    cam.update(60.0, target);
    assert!(cam.is_shaking());
    cam.update(60.0, target);
    assert!(!cam.is_shaking());
}

#[test]
fn test_centered_target_converges_monotonically() {
    let mut cam = camera();
    // Move away first so there is something to converge from
    for _ in 0..50 {
        cam.update(16.0, Vec2::new(1_200.0, 360.0));
    }

    let target = Vec2::new(640.0, 360.0);
    let mut distance = cam.base_offset().x.abs();
    for _ in 0..10 {
        cam.update(16.0, target);
        let o = cam.base_offset();
        assert!(o.x.abs() <= distance);
        assert!((-1280.0..=0.0).contains(&o.x));
        distance = o.x.abs();
    }
}
