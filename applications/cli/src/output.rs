//! Simulated audio device
//!
//! Stands in for a real sound card: it keeps a position per loaded stream
//! and moves it forward only when told to, which makes the interactive
//! player deterministic and testable.

use podcastr_core::{AudioOutput, CoreError, DeviceEvent, Episode};
use std::collections::HashMap;
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct SimulatedOutput {
    // Stream lengths by URL; unknown streams never end
    durations: HashMap<String, u64>,
    url: Option<String>,
    playing: bool,
    looping: bool,
    position: u64,
}

impl SimulatedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Device that knows the length of every episode in `episodes`
    pub fn for_episodes<'a>(episodes: impl IntoIterator<Item = &'a Episode>) -> Self {
        let mut output = Self::new();
        output.register_all(episodes);
        output
    }

    /// Remember how long the stream at `url` is
    pub fn register(&mut self, url: impl Into<String>, duration_seconds: u64) {
        self.durations.insert(url.into(), duration_seconds);
    }

    pub fn register_all<'a>(&mut self, episodes: impl IntoIterator<Item = &'a Episode>) {
        for episode in episodes {
            self.register(episode.audio_url.clone(), episode.duration_seconds);
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    fn duration(&self) -> Option<u64> {
        self.url
            .as_ref()
            .and_then(|url| self.durations.get(url).copied())
    }

    /// Move the playhead forward by `seconds` of playback
    ///
    /// Returns the signals a real device would have raised meanwhile. A
    /// looping stream wraps around silently; otherwise reaching the end
    /// stops the device and reports `Ended`.
    pub fn advance(&mut self, seconds: u64) -> Vec<DeviceEvent> {
        if !self.playing || self.url.is_none() || seconds == 0 {
            return Vec::new();
        }

        let position = self.position.saturating_add(seconds);

        let Some(duration) = self.duration() else {
            self.position = position;
            return vec![DeviceEvent::TimeUpdate(position)];
        };

        if position < duration {
            self.position = position;
            return vec![DeviceEvent::TimeUpdate(position)];
        }

        if self.looping && duration > 0 {
            self.position = position % duration;
            return vec![DeviceEvent::TimeUpdate(self.position)];
        }

        trace!(duration, "Simulated stream ended");
        self.position = duration;
        self.playing = false;
        vec![DeviceEvent::TimeUpdate(duration), DeviceEvent::Ended]
    }
}

impl AudioOutput for SimulatedOutput {
    fn load(&mut self, url: &str) -> podcastr_core::Result<()> {
        if url.is_empty() {
            return Err(CoreError::output("cannot load an empty URL"));
        }

        self.url = Some(url.to_string());
        self.position = 0;
        self.playing = false;
        Ok(())
    }

    fn play(&mut self) -> podcastr_core::Result<()> {
        if self.url.is_none() {
            return Err(CoreError::output("nothing loaded"));
        }

        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> podcastr_core::Result<()> {
        self.playing = false;
        Ok(())
    }

    fn seek(&mut self, seconds: u64) -> podcastr_core::Result<()> {
        self.position = self.duration().map_or(seconds, |d| seconds.min(d));
        Ok(())
    }

    fn set_looping(&mut self, looping: bool) -> podcastr_core::Result<()> {
        self.looping = looping;
        Ok(())
    }

    fn position(&self) -> u64 {
        self.position
    }
}
