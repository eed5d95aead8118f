//! Audio Module
//!
//! Synthesized sound effects and looped background music on rodio.

pub mod engine;
pub mod tones;

use thiserror::Error;

pub use engine::AudioManager;
pub use tones::Tone;

/// Errors that can occur during audio operations
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Audio device not available")]
    DeviceNotAvailable,

    #[error("Sound file not found: {0}")]
    SoundNotFound(String),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Named sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    ButtonClick,
    CameraShutter,
    Interaction,
    Footstep,
    Thunder,
}

impl SoundEffect {
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::ButtonClick => "button_click",
            SoundEffect::CameraShutter => "camera_shutter",
            SoundEffect::Interaction => "interaction",
            SoundEffect::Footstep => "footstep",
            SoundEffect::Thunder => "thunder",
        }
    }
}

/// Background music tracks, loaded from `assets/audio/<name>.{mp3,wav}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    Menu,
    Game,
}

impl MusicTrack {
    pub fn name(&self) -> &'static str {
        match self {
            MusicTrack::Menu => "menu_music",
            MusicTrack::Game => "game_music",
        }
    }
}
