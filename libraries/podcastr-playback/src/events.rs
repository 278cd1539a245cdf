//! Session Events
//!
//! Event-based communication between the playback session and whatever
//! renders it. Events are queued as state changes and drained by the caller:
//! - Queue replaced or cleared
//! - Current episode changed
//! - Play/pause, loop and shuffle flags flipped

use serde::{Deserialize, Serialize};

/// Events emitted by a playback session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new queue was loaded with `play_list`
    QueueReplaced {
        /// Number of episodes in the new queue
        length: usize,
        /// Index playback starts from
        start_index: usize,
    },

    /// The current episode changed
    ///
    /// Emitted for `play_list`, next/previous navigation and advancing at
    /// end of episode. A shuffle pick that lands on the same index emits
    /// nothing.
    EpisodeChanged {
        /// New position in the queue
        index: usize,
        /// ID of the new current episode
        episode_id: String,
        /// ID of the episode that was current before (if any)
        previous_episode_id: Option<String>,
    },

    /// Play/pause flag changed
    PlayingChanged { is_playing: bool },

    /// Loop flag changed
    LoopingChanged { is_looping: bool },

    /// Shuffle flag changed
    ShufflingChanged { is_shuffling: bool },

    /// The session was emptied
    Cleared,
}

impl SessionEvent {
    /// Whether the rendering layer needs to point the device at a new stream
    pub fn changes_source(&self) -> bool {
        matches!(
            self,
            SessionEvent::EpisodeChanged { .. } | SessionEvent::Cleared
        )
    }
}
