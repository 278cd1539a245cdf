//! Core types for playback sessions

use podcastr_core::Episode;
use serde::{Deserialize, Serialize};

/// Configuration for a playback session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for shuffle navigation (default: None, seeded from entropy)
    #[serde(default)]
    pub shuffle_seed: Option<u64>,

    /// Initial loop flag (default: false)
    #[serde(default)]
    pub start_looping: bool,

    /// Initial shuffle flag (default: false)
    #[serde(default)]
    pub start_shuffling: bool,
}

/// What the session did when the current episode reached its end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndedOutcome {
    /// Looping is on: the device must restart the same episode at 0
    Restart,

    /// Moved on to the episode at this index
    Advanced(usize),

    /// Nothing left to play; the session was cleared
    Cleared,
}

/// Read-only view of a session for the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Episode at the current position, if any
    pub current: Option<Episode>,

    /// Current position in the queue
    pub current_index: Option<usize>,

    /// Queue length
    pub queue_len: usize,

    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Which player controls are usable right now
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub shuffle: bool,
    pub previous: bool,
    pub play_pause: bool,
    pub next: bool,
    pub repeat: bool,
    pub seek: bool,
}
