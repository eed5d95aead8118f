//! Sky color per weather mode

use stormrunner::world::weather::skybox::{sky_color, CLEAR_SKY, CLOUDY_SKY, STORM_SKY};
use stormrunner::world::WeatherMode;

#[test]
fn test_clear_sky_is_constant() {
    for intensity in [0.0, 0.25, 0.5, 1.0] {
        assert_eq!(sky_color(WeatherMode::Clear, intensity), CLEAR_SKY);
    }
}

#[test]
fn test_rain_endpoints() {
    assert_eq!(sky_color(WeatherMode::Rain, 0.0), CLEAR_SKY);
    assert_eq!(sky_color(WeatherMode::Rain, 1.0), CLOUDY_SKY);
}

#[test]
fn test_storm_endpoints() {
    assert_eq!(sky_color(WeatherMode::Storm, 0.0), CLOUDY_SKY);
    assert_eq!(sky_color(WeatherMode::Storm, 1.0), STORM_SKY);
}

#[test]
fn test_rain_darkens_with_intensity() {
    let light = sky_color(WeatherMode::Rain, 0.2);
    let dark = sky_color(WeatherMode::Rain, 0.6);
    assert!(dark.b < light.b);
    assert!(dark.g < light.g);
}
