//! Sine-beep synthesis for sound effects

use rodio::source::SineWave;
use rodio::Source;
use std::time::Duration;

use super::SoundEffect;

/// Peak amplitude of a beep relative to full scale (4096 of 32768)
pub const BEEP_AMPLITUDE: f32 = 4096.0 / 32768.0;

/// A single tone with frequency and duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Frequency in Hz
    pub frequency_hz: f32,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl Tone {
    /// Create a new tone.
    pub fn new(frequency_hz: f32, duration_ms: u64) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    /// Tone used for a sound effect
    pub fn for_effect(effect: SoundEffect) -> Self {
        match effect {
            SoundEffect::ButtonClick => Tone::new(440.0, 100),
            SoundEffect::CameraShutter => Tone::new(800.0, 200),
            SoundEffect::Interaction => Tone::new(600.0, 150),
            SoundEffect::Footstep => Tone::new(200.0, 50),
            SoundEffect::Thunder => Tone::new(80.0, 400),
        }
    }

    /// Sine source for this tone scaled by `gain` (0-1) on top of the beep amplitude.
    pub fn source(&self, gain: f32) -> impl Source<Item = f32> + Send + 'static {
        SineWave::new(self.frequency_hz)
            .take_duration(Duration::from_millis(self.duration_ms))
            .amplify(BEEP_AMPLITUDE * gain.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_tones() {
        assert_eq!(Tone::for_effect(SoundEffect::ButtonClick), Tone::new(440.0, 100));
        assert_eq!(Tone::for_effect(SoundEffect::Thunder), Tone::new(80.0, 400));
    }

    #[test]
    fn test_source_is_quiet() {
        let peak = Tone::new(440.0, 100)
            .source(1.0)
            .fold(0.0f32, |max, s| max.max(s.abs()));
        assert!(peak <= BEEP_AMPLITUDE + 1e-4);
        assert!(peak > 0.0);
    }
}
