//! Sky background color per weather mode.

use super::WeatherMode;
use crate::world::renderer::Rgb;

/// Sky on a clear day
pub const CLEAR_SKY: Rgb = Rgb::new(135, 206, 235);
/// Overcast sky at full rain
pub const CLOUDY_SKY: Rgb = Rgb::new(105, 105, 105);
/// Sky at full storm
pub const STORM_SKY: Rgb = Rgb::new(47, 79, 79);

/// Sky color for `mode` at the given rain intensity.
///
/// Rain blends clear toward cloudy by intensity; storm blends cloudy toward the
/// storm color, saturating at intensity 1.
pub fn sky_color(mode: WeatherMode, rain_intensity: f32) -> Rgb {
    match mode {
        WeatherMode::Clear => CLEAR_SKY,
        WeatherMode::Rain => CLEAR_SKY.lerp(CLOUDY_SKY, rain_intensity),
        WeatherMode::Storm => CLOUDY_SKY.lerp(STORM_SKY, rain_intensity.min(1.0)),
    }
}
