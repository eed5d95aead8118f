//! Weather simulator bounds, lightning timing and rain particles

use stormrunner::storage::config::WeatherConfig;
use stormrunner::world::renderer::DrawList;
use stormrunner::world::{GameRng, WeatherMode, WeatherSimulator};

const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;

fn simulator(auto_change: bool, seed: u64) -> (WeatherSimulator, GameRng) {
    let config = WeatherConfig {
        auto_change,
        ..WeatherConfig::default()
    };
    let mut rng = GameRng::new(seed);
    let weather = WeatherSimulator::new(&config, WIDTH, HEIGHT, &mut rng);
    (weather, rng)
}

#[test]
fn test_starts_clear_and_calm() {
    let (weather, _) = simulator(false, 1);
    assert_eq!(weather.mode(), WeatherMode::Clear);
    assert_eq!(weather.rain_intensity(), 0.0);
    assert_eq!(weather.wind_strength(), 0.0);
    assert!(!weather.is_lightning_active());
    assert_eq!(weather.particles().len(), 200);
}

#[test]
fn test_intensity_and_wind_stay_in_bounds() {
    let steps = [0.0, 1.0, 16.0, 250.0, 3_000.0, 100_000.0, -50.0];
    let ceilings = [
        (WeatherMode::Clear, 1.0, 1.0),
        (WeatherMode::Rain, 0.7, 0.3),
        (WeatherMode::Storm, 1.0, 1.0),
    ];

    for (mode, max_intensity, max_wind) in ceilings {
        let (mut weather, mut rng) = simulator(false, 2);
        // Start from a full storm so decaying modes are exercised too
        weather.set_weather(WeatherMode::Storm);
        weather.update(100_000.0, &mut rng);
        weather.set_weather(mode);

        for dt in steps {
            weather.update(dt, &mut rng);
            let intensity = weather.rain_intensity();
            let wind = weather.wind_strength();
            assert!((0.0..=max_intensity).contains(&intensity), "{:?} intensity {}", mode, intensity);
            assert!((0.0..=max_wind).contains(&wind), "{:?} wind {}", mode, wind);
        }
    }
}

#[test]
fn test_clear_decays_to_zero() {
    let (mut weather, mut rng) = simulator(false, 3);
    weather.set_weather(WeatherMode::Rain);
    weather.update(10_000.0, &mut rng);
    assert!((weather.rain_intensity() - 0.7).abs() < 1e-6);

    weather.set_weather(WeatherMode::Clear);
    let mut last = weather.rain_intensity();
    for _ in 0..100 {
        weather.update(100.0, &mut rng);
        assert!(weather.rain_intensity() <= last);
        last = weather.rain_intensity();
    }
    assert_eq!(weather.rain_intensity(), 0.0);
    assert_eq!(weather.wind_strength(), 0.0);
}

#[test]
fn test_storm_strikes_within_three_long_updates() {
    for seed in 0..20 {
        let (mut weather, mut rng) = simulator(false, seed);
        weather.set_weather(WeatherMode::Storm);

        let struck = (0..3).any(|_| weather.update(9_000.0, &mut rng).lightning_struck);
        assert!(struck, "no strike for seed {}", seed);
    }
}

#[test]
fn test_no_lightning_outside_storm() {
    let (mut weather, mut rng) = simulator(false, 4);
    weather.set_weather(WeatherMode::Rain);
    for _ in 0..50 {
        assert!(!weather.update(9_000.0, &mut rng).lightning_struck);
    }
    assert!(!weather.is_lightning_active());
}

#[test]
fn test_particles_stay_in_vertical_band_after_long_update() {
    let (mut weather, mut rng) = simulator(false, 5);
    weather.set_weather(WeatherMode::Storm);
    weather.update(100_000.0, &mut rng);
    assert_eq!(weather.rain_intensity(), 1.0);

    weather.update(100_000.0, &mut rng);
    assert_eq!(weather.particles().len(), 200);
    for p in weather.particles() {
        assert!((-50.0..=HEIGHT).contains(&p.y), "particle y {}", p.y);
    }
}

#[test]
fn test_invalid_name_is_ignored() {
    let (mut weather, _) = simulator(false, 6);
    weather.set_weather_by_name("storm");
    assert_eq!(weather.mode(), WeatherMode::Storm);
    weather.set_weather_by_name("hail");
    assert_eq!(weather.mode(), WeatherMode::Storm);
}

#[test]
fn test_auto_change_reports_new_mode() {
    let (mut weather, mut rng) = simulator(true, 7);
    let mut changes = 0;
    for _ in 0..40 {
        if let Some(mode) = weather.update(31_000.0, &mut rng).mode_changed {
            assert_eq!(mode, weather.mode());
            changes += 1;
        }
    }
    assert!(changes > 0);
}

#[test]
fn test_rain_renders_streaks() {
    let (mut weather, mut rng) = simulator(false, 8);
    weather.set_weather(WeatherMode::Rain);
    // Small steps keep most streaks on screen instead of recycling them above it
    for _ in 0..100 {
        weather.update(100.0, &mut rng);
    }

    let mut list = DrawList::new(WIDTH, HEIGHT);
    weather.render(&mut list, &mut rng);
    assert!(list.lines().count() > 0);
}
