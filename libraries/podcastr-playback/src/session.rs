//! Playback session - the single source of truth for what is playing
//!
//! Owns the episode queue, the current position, and the play/loop/shuffle
//! flags. Every mutation goes through a command method; failed commands
//! leave the session exactly as it was.

use crate::{
    error::{PlaybackError, Result},
    events::SessionEvent,
    navigation,
    types::{EndedOutcome, SessionConfig, SessionSnapshot},
};
use podcastr_core::Episode;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use tracing::{debug, warn};

/// Playback session state machine
///
/// Invariants:
/// - `current_index` is `Some(i)` with `i < queue.len()` exactly when the
///   queue is non-empty
/// - `is_playing` is never true while the queue is empty
/// - only `play_list` and `clear` replace the queue
pub struct PlaybackSession {
    // Queue and position
    queue: Vec<Episode>,
    current_index: Option<usize>,

    // Flags
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,

    // Shuffle randomness
    rng: StdRng,

    // Event queue for UI synchronization
    pending_events: Vec<SessionEvent>,
}

impl PlaybackSession {
    /// Create an empty session
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            queue: Vec::new(),
            current_index: None,
            is_playing: false,
            is_looping: config.start_looping,
            is_shuffling: config.start_shuffling,
            rng,
            pending_events: Vec::new(),
        }
    }

    // ===== Commands =====

    /// Replace the queue and start playing from `start_index`
    ///
    /// Fails with `InvalidArgument` when `start_index` is out of range
    /// (including an empty list); the previous queue is kept in that case.
    pub fn play_list(&mut self, episodes: Vec<Episode>, start_index: usize) -> Result<()> {
        if start_index >= episodes.len() {
            warn!(
                start_index,
                len = episodes.len(),
                "Rejected play_list with out-of-range start index"
            );
            return Err(PlaybackError::InvalidArgument {
                index: start_index,
                len: episodes.len(),
            });
        }

        let previous_episode_id = self.current_episode().map(|e| e.id.clone());
        let length = episodes.len();

        self.queue = episodes;
        self.current_index = Some(start_index);

        debug!(length, start_index, "Queue replaced");
        self.pending_events.push(SessionEvent::QueueReplaced {
            length,
            start_index,
        });
        self.emit_episode_changed(start_index, previous_episode_id);
        self.update_playing(true);

        Ok(())
    }

    /// Flip play/pause, returning the new value
    pub fn toggle_play(&mut self) -> Result<bool> {
        if self.queue.is_empty() {
            return Err(PlaybackError::EmptyQueue);
        }

        let playing = !self.is_playing;
        self.update_playing(playing);
        Ok(playing)
    }

    /// Set play/pause directly
    ///
    /// Used to reconcile with the device once it has actually started or
    /// stopped. Pausing always succeeds; playing needs a loaded queue.
    pub fn set_playing_state(&mut self, value: bool) -> Result<()> {
        if value && self.queue.is_empty() {
            return Err(PlaybackError::EmptyQueue);
        }

        self.update_playing(value);
        Ok(())
    }

    /// Flip the loop flag, returning the new value
    pub fn toggle_loop(&mut self) -> bool {
        self.is_looping = !self.is_looping;
        debug!(is_looping = self.is_looping, "Loop toggled");
        self.pending_events.push(SessionEvent::LoopingChanged {
            is_looping: self.is_looping,
        });
        self.is_looping
    }

    /// Flip the shuffle flag, returning the new value
    ///
    /// The current position is untouched; only the policy used by the next
    /// `play_next` changes.
    pub fn toggle_shuffle(&mut self) -> bool {
        self.is_shuffling = !self.is_shuffling;
        debug!(is_shuffling = self.is_shuffling, "Shuffle toggled");
        self.pending_events.push(SessionEvent::ShufflingChanged {
            is_shuffling: self.is_shuffling,
        });
        self.is_shuffling
    }

    /// Move to the next episode, returning the new index
    ///
    /// Sequential mode steps forward by one. Shuffle mode picks any index
    /// at random, repeats allowed.
    pub fn play_next(&mut self) -> Result<usize> {
        let current = self.current_index.ok_or(PlaybackError::EmptyQueue)?;

        let Some(next) =
            navigation::next_index(current, self.queue.len(), self.is_shuffling, &mut self.rng)
        else {
            debug!(current, shuffling = self.is_shuffling, "No next episode");
            return Err(PlaybackError::NotPossible("no next episode"));
        };

        self.move_to(next);
        Ok(next)
    }

    /// Move to the previous episode, returning the new index
    ///
    /// Always sequential, even with shuffle on.
    pub fn play_previous(&mut self) -> Result<usize> {
        let current = self.current_index.ok_or(PlaybackError::EmptyQueue)?;

        let Some(previous) = navigation::previous_index(current, self.queue.len()) else {
            debug!(current, "No previous episode");
            return Err(PlaybackError::NotPossible("no previous episode"));
        };

        self.move_to(previous);
        Ok(previous)
    }

    /// Empty the session entirely
    ///
    /// Loop and shuffle preferences survive.
    pub fn clear(&mut self) {
        let had_queue = !self.queue.is_empty();

        self.update_playing(false);
        self.queue.clear();
        self.current_index = None;

        if had_queue {
            debug!("Session cleared");
            self.pending_events.push(SessionEvent::Cleared);
        }
    }

    /// React to the device reporting end of the current episode
    ///
    /// Looping wins over advancing: the session stays put and the caller
    /// restarts the device at 0. Otherwise advance if possible, else clear.
    pub fn on_episode_ended(&mut self) -> EndedOutcome {
        if self.queue.is_empty() {
            return EndedOutcome::Cleared;
        }

        if self.is_looping {
            debug!(index = ?self.current_index, "Episode ended, looping");
            return EndedOutcome::Restart;
        }

        if self.has_next() {
            if let Ok(index) = self.play_next() {
                return EndedOutcome::Advanced(index);
            }
        }

        debug!("Episode ended with nothing next, clearing");
        self.clear();
        EndedOutcome::Cleared
    }

    // ===== Queries =====

    /// Whether `play_next` would succeed
    pub fn has_next(&self) -> bool {
        self.current_index
            .is_some_and(|i| navigation::has_next(i, self.queue.len(), self.is_shuffling))
    }

    /// Whether `play_previous` would succeed
    pub fn has_previous(&self) -> bool {
        self.current_index
            .is_some_and(|i| navigation::has_previous(i, self.queue.len()))
    }

    /// Loaded episodes in playback order
    pub fn queue(&self) -> &[Episode] {
        &self.queue
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Position of the current episode (None when empty)
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// The current episode (None when empty)
    pub fn current_episode(&self) -> Option<&Episode> {
        self.current_index.and_then(|i| self.queue.get(i))
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Owned view of the state for rendering
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current: self.current_episode().cloned(),
            current_index: self.current_index,
            queue_len: self.queue.len(),
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }

    // ===== Events =====

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Whether events are waiting to be drained
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    fn move_to(&mut self, index: usize) {
        let previous = self.current_index;
        if previous == Some(index) {
            debug!(index, "Navigation landed on the current episode");
            return;
        }

        let previous_episode_id = self.current_episode().map(|e| e.id.clone());
        self.current_index = Some(index);
        self.emit_episode_changed(index, previous_episode_id);
    }

    fn update_playing(&mut self, playing: bool) {
        if self.is_playing != playing {
            self.is_playing = playing;
            debug!(is_playing = playing, "Playing state changed");
            self.pending_events.push(SessionEvent::PlayingChanged {
                is_playing: playing,
            });
        }
    }

    fn emit_episode_changed(&mut self, index: usize, previous_episode_id: Option<String>) {
        let episode_id = self.queue[index].id.clone();
        debug!(index, episode_id = %episode_id, "Current episode changed");
        self.pending_events.push(SessionEvent::EpisodeChanged {
            index,
            episode_id,
            previous_episode_id,
        });
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl fmt::Debug for PlaybackSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("queue_len", &self.queue.len())
            .field("current_index", &self.current_index)
            .field("is_playing", &self.is_playing)
            .field("is_looping", &self.is_looping)
            .field("is_shuffling", &self.is_shuffling)
            .finish_non_exhaustive()
    }
}
