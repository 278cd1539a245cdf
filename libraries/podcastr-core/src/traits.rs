/// Traits for Podcastr's external collaborators
use crate::error::Result;
use crate::types::{Episode, EpisodeFilters};
use async_trait::async_trait;

/// Episode metadata provider
///
/// Implementers return episodes already sorted per `filters` and with
/// display fields derived. A malformed record fails the whole fetch; a
/// partially-valid list is never returned.
#[async_trait]
pub trait EpisodeSource: Send + Sync {
    /// Fetch an ordered list of episodes
    ///
    /// # Errors
    /// Returns an error if the provider is unreachable or any record is malformed
    async fn fetch_episodes(&self, filters: &EpisodeFilters) -> Result<Vec<Episode>>;
}

/// Audio output device handle
///
/// The device is driven from session state by the rendering layer; it holds
/// no knowledge of queues. Its outbound signals are reported as
/// [`DeviceEvent`] values which the rendering layer forwards back.
pub trait AudioOutput: Send {
    /// Point the device at a new stream, resetting its position to zero
    fn load(&mut self, url: &str) -> Result<()>;

    /// Start or resume advancing
    fn play(&mut self) -> Result<()>;

    /// Stop advancing, keeping the position
    fn pause(&mut self) -> Result<()>;

    /// Jump to a position in seconds
    ///
    /// Implementations clamp to `[0, duration]` of the loaded stream.
    fn seek(&mut self, seconds: u64) -> Result<()>;

    /// Repeat the loaded stream instead of ending
    fn set_looping(&mut self, looping: bool) -> Result<()>;

    /// Current position in seconds
    fn position(&self) -> u64;
}

/// Signals reported by an audio output device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceEvent {
    /// Playback position advanced (whole seconds)
    TimeUpdate(u64),

    /// Device actually started playing
    Started,

    /// Device actually paused
    Paused,

    /// Stream reached its end
    Ended,
}
