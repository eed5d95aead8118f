//! Audio Engine
//!
//! Core audio playback using rodio. Without an output device the manager keeps
//! tracking music state and volumes but plays nothing.

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::tones::Tone;
use super::{AudioError, MusicTrack, SoundEffect};
use crate::storage::config::AudioSettings;

/// Extensions tried, in order, when looking up a music track
const MUSIC_EXTENSIONS: [&str; 2] = ["mp3", "wav"];

/// Open rodio output. The stream must stay alive for the handle to work.
struct Output {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

/// Sound effect and music playback.
pub struct AudioManager {
    output: Option<Output>,
    music_sink: Option<Sink>,
    current_music: Option<MusicTrack>,
    music_paused: bool,
    settings: AudioSettings,
    assets_dir: PathBuf,
}

impl AudioManager {
    /// Open the default output device.
    ///
    /// A missing device is logged and the manager runs silently.
    pub fn new(settings: &AudioSettings, assets_dir: impl Into<PathBuf>) -> Self {
        let mut manager = Self::disabled(settings, assets_dir);

        if !settings.enabled {
            tracing::info!("Audio disabled in configuration");
            return manager;
        }

        manager.output = Self::open_output();
        manager
    }

    fn open_output() -> Option<Output> {
        match OutputStream::try_default() {
            Ok((stream, handle)) => {
                tracing::info!("Audio output initialized");
                Some(Output {
                    _stream: stream,
                    handle,
                })
            }
            Err(e) => {
                tracing::warn!("Audio device not available, continuing without sound: {}", e);
                None
            }
        }
    }

    /// Manager with no output device.
    pub fn disabled(settings: &AudioSettings, assets_dir: impl Into<PathBuf>) -> Self {
        let mut settings = settings.clone();
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.music_volume = settings.music_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);

        Self {
            output: None,
            music_sink: None,
            current_music: None,
            music_paused: false,
            settings,
            assets_dir: assets_dir.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.output.is_some()
    }

    /// Play a sound effect, logging instead of failing.
    pub fn play_sfx(&self, effect: SoundEffect) {
        if let Err(e) = self.try_play_sfx(effect, 1.0) {
            tracing::debug!("Could not play {}: {}", effect.name(), e);
        }
    }

    /// Play a sound effect at `volume` (0-1) on top of the sfx and master volumes.
    pub fn try_play_sfx(&self, effect: SoundEffect, volume: f32) -> Result<(), AudioError> {
        if !self.settings.enabled {
            return Ok(());
        }
        let output = self.output.as_ref().ok_or(AudioError::DeviceNotAvailable)?;

        let gain = self.sfx_gain(volume);
        if gain <= 0.0 {
            return Ok(());
        }

        output
            .handle
            .play_raw(Tone::for_effect(effect).source(gain))
            .map_err(|e| AudioError::PlaybackFailed(e.to_string()))
    }

    /// Effective gain for a sound effect at `volume`
    pub fn sfx_gain(&self, volume: f32) -> f32 {
        self.settings.sfx_volume * self.settings.master_volume * volume.clamp(0.0, 1.0)
    }

    fn music_gain(&self) -> f32 {
        self.settings.music_volume * self.settings.master_volume
    }

    /// Locate a track file in the assets directory
    pub fn find_music(assets_dir: &Path, track: MusicTrack) -> Option<PathBuf> {
        MUSIC_EXTENSIONS
            .iter()
            .map(|ext| assets_dir.join(format!("{}.{}", track.name(), ext)))
            .find(|path| path.exists())
    }

    /// Start looping `track`. Already-playing tracks are left alone.
    pub fn play_music(&mut self, track: MusicTrack) -> Result<(), AudioError> {
        if self.current_music == Some(track) && !self.music_paused {
            return Ok(());
        }

        self.stop_music();
        if !self.settings.enabled {
            return Ok(());
        }
        self.current_music = Some(track);

        let Some(output) = self.output.as_ref() else {
            return Ok(());
        };

        let path = Self::find_music(&self.assets_dir, track)
            .ok_or_else(|| AudioError::SoundNotFound(track.name().to_string()))?;

        let file = File::open(&path).map_err(|e| AudioError::PlaybackFailed(e.to_string()))?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| AudioError::PlaybackFailed(e.to_string()))?;
        let sink =
            Sink::try_new(&output.handle).map_err(|e| AudioError::PlaybackFailed(e.to_string()))?;

        sink.set_volume(self.music_gain());
        sink.append(source.repeat_infinite());
        self.music_sink = Some(sink);

        tracing::info!("Playing music {}", path.display());
        Ok(())
    }

    pub fn pause_music(&mut self) {
        if let Some(sink) = &self.music_sink {
            sink.pause();
        }
        if self.current_music.is_some() {
            self.music_paused = true;
        }
    }

    pub fn resume_music(&mut self) {
        if let Some(sink) = &self.music_sink {
            sink.play();
        }
        self.music_paused = false;
    }

    pub fn stop_music(&mut self) {
        if let Some(sink) = self.music_sink.take() {
            sink.stop();
        }
        self.current_music = None;
        self.music_paused = false;
    }

    pub fn current_music(&self) -> Option<MusicTrack> {
        self.current_music
    }

    pub fn is_music_paused(&self) -> bool {
        self.music_paused
    }

    pub fn set_master_volume(&mut self, volume: f32) {
        self.settings.master_volume = volume.clamp(0.0, 1.0);
        self.refresh_music_volume();
    }

    pub fn set_music_volume(&mut self, volume: f32) {
        self.settings.music_volume = volume.clamp(0.0, 1.0);
        self.refresh_music_volume();
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.settings.sfx_volume = volume.clamp(0.0, 1.0);
    }

    /// Turn all sound on or off. Disabling stops the music and releases the
    /// output device; enabling reopens it.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled == self.settings.enabled {
            return;
        }
        self.settings.enabled = enabled;

        if enabled {
            if self.output.is_none() {
                self.output = Self::open_output();
            }
        } else {
            self.stop_music();
            self.output = None;
        }
        tracing::info!(enabled, "Audio toggled");
    }

    /// Adopt new audio settings
    pub fn apply_settings(&mut self, settings: &AudioSettings) {
        self.set_enabled(settings.enabled);
        self.set_master_volume(settings.master_volume);
        self.set_music_volume(settings.music_volume);
        self.set_sfx_volume(settings.sfx_volume);
    }

    pub fn settings(&self) -> &AudioSettings {
        &self.settings
    }

    fn refresh_music_volume(&self) {
        if let Some(sink) = &self.music_sink {
            sink.set_volume(self.music_gain());
        }
    }
}
