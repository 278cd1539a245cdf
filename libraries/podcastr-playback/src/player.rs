//! Player - binds a playback session to an audio output device
//!
//! The rendering layer talks only to `Player`: it forwards user intents as
//! commands and device signals as [`DeviceEvent`]s. After every change the
//! player reconciles the device with the session (source, loop, play/pause)
//! and keeps the progress timer shown next to the seek bar.

use crate::{
    error::{PlaybackError, Result},
    events::SessionEvent,
    session::PlaybackSession,
    types::{Controls, EndedOutcome},
};
use podcastr_core::{AudioOutput, DeviceEvent, Episode};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Player behaviour settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Start the device as soon as a new episode is loaded (default: true)
    pub autoplay: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { autoplay: true }
    }
}

/// Session plus device, kept in step
pub struct Player<O: AudioOutput> {
    session: PlaybackSession,
    output: O,
    config: PlayerConfig,

    // What the device currently holds
    loaded_episode_id: Option<String>,
    output_playing: bool,
    output_looping: Option<bool>,

    // Seconds into the current episode
    progress: u64,
}

impl<O: AudioOutput> Player<O> {
    /// Wrap a session and a device
    ///
    /// The device is reconciled lazily on the first command.
    pub fn new(session: PlaybackSession, output: O, config: PlayerConfig) -> Self {
        Self {
            session,
            output,
            config,
            loaded_episode_id: None,
            output_playing: false,
            output_looping: None,
            progress: 0,
        }
    }

    // ===== Commands =====

    /// Load a queue and start at `start_index`
    pub fn play_list(&mut self, episodes: Vec<Episode>, start_index: usize) -> Result<()> {
        self.session.play_list(episodes, start_index)?;
        self.sync_output()
    }

    /// Flip play/pause
    pub fn toggle_play(&mut self) -> Result<bool> {
        let playing = self.session.toggle_play()?;
        self.sync_output()?;
        Ok(playing)
    }

    /// Skip forward
    pub fn play_next(&mut self) -> Result<usize> {
        let index = self.session.play_next()?;
        self.sync_output()?;
        Ok(index)
    }

    /// Skip back
    pub fn play_previous(&mut self) -> Result<usize> {
        let index = self.session.play_previous()?;
        self.sync_output()?;
        Ok(index)
    }

    /// Flip the loop flag and tell the device
    pub fn toggle_loop(&mut self) -> Result<bool> {
        let looping = self.session.toggle_loop();
        self.sync_output()?;
        Ok(looping)
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) -> Result<bool> {
        let shuffling = self.session.toggle_shuffle();
        self.sync_output()?;
        Ok(shuffling)
    }

    /// Stop and unload everything
    pub fn clear(&mut self) -> Result<()> {
        self.session.clear();
        self.sync_output()
    }

    /// Jump within the current episode, returning the clamped position
    pub fn seek(&mut self, seconds: u64) -> Result<u64> {
        let duration = self
            .session
            .current_episode()
            .map(|e| e.duration_seconds)
            .ok_or(PlaybackError::EmptyQueue)?;

        let target = seconds.min(duration);
        self.output.seek(target)?;
        self.progress = target;
        trace!(target, "Seeked");
        Ok(target)
    }

    /// Forward a signal reported by the device
    pub fn handle_device_event(&mut self, event: DeviceEvent) -> Result<()> {
        match event {
            DeviceEvent::TimeUpdate(seconds) => {
                let duration = self.current_duration();
                self.progress = seconds.min(duration);
                Ok(())
            }
            DeviceEvent::Started => {
                self.output_playing = true;
                self.session.set_playing_state(true)
            }
            DeviceEvent::Paused => {
                self.output_playing = false;
                self.session.set_playing_state(false)
            }
            DeviceEvent::Ended => self.handle_ended(),
        }
    }

    // ===== Queries =====

    /// Which controls the UI should enable
    pub fn controls(&self) -> Controls {
        if self.session.current_episode().is_none() {
            return Controls::default();
        }

        Controls {
            shuffle: self.session.len() > 1,
            previous: self.session.has_previous(),
            play_pause: true,
            next: self.session.has_next(),
            repeat: true,
            seek: true,
        }
    }

    /// Seconds into the current episode
    pub fn progress(&self) -> u64 {
        self.progress
    }

    /// Length of the current episode in seconds (0 when empty)
    pub fn current_duration(&self) -> u64 {
        self.session
            .current_episode()
            .map_or(0, |e| e.duration_seconds)
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Take session events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.session.drain_events()
    }

    // ===== Internals =====

    fn handle_ended(&mut self) -> Result<()> {
        // The device stops by itself at end of stream
        self.output_playing = false;

        match self.session.on_episode_ended() {
            EndedOutcome::Restart => {
                debug!("Restarting looped episode");
                self.output.seek(0)?;
                self.progress = 0;
                self.sync_output()
            }
            EndedOutcome::Advanced(index) => {
                debug!(index, "Advanced after episode ended");
                // Shuffle may land on the episode that just ended; force a reload
                self.loaded_episode_id = None;
                self.sync_output()
            }
            EndedOutcome::Cleared => {
                debug!("Queue finished");
                self.sync_output()
            }
        }
    }

    fn sync_output(&mut self) -> Result<()> {
        let current = self
            .session
            .current_episode()
            .map(|e| (e.id.clone(), e.audio_url.clone()));

        let Some((episode_id, audio_url)) = current else {
            if self.loaded_episode_id.take().is_some() && self.output_playing {
                self.output.pause()?;
            }
            self.output_playing = false;
            self.progress = 0;
            return Ok(());
        };

        if self.loaded_episode_id.as_deref() != Some(episode_id.as_str()) {
            debug!(episode_id = %episode_id, url = %audio_url, "Loading episode");
            self.output.load(&audio_url)?;
            self.loaded_episode_id = Some(episode_id);
            self.output_playing = false;
            self.progress = 0;

            if self.config.autoplay {
                self.session.set_playing_state(true)?;
            }
        }

        let looping = self.session.is_looping();
        if self.output_looping != Some(looping) {
            self.output.set_looping(looping)?;
            self.output_looping = Some(looping);
        }

        let playing = self.session.is_playing();
        if playing != self.output_playing {
            if playing {
                self.output.play()?;
            } else {
                self.output.pause()?;
            }
            self.output_playing = playing;
        }

        Ok(())
    }
}
