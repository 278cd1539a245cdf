//! Podcastr - Playback Session
//!
//! Platform-agnostic playback session management for Podcastr.
//!
//! This crate provides:
//! - The playback session state machine (queue, position, play/loop/shuffle)
//! - Sequential and shuffled next/previous navigation
//! - Session events for UI synchronization
//! - `Player`, which keeps an audio output device in step with a session
//!
//! # Architecture
//!
//! `podcastr-playback` knows nothing about HTTP or audio hardware. The
//! episode source and the audio device are collaborators described by
//! traits in `podcastr-core`; a front end wires them together.
//!
//! # Example: Session
//!
//! ```rust
//! use podcastr_core::Episode;
//! use podcastr_playback::{EndedOutcome, PlaybackSession};
//!
//! let episode = |id: &str| Episode {
//!     id: id.to_string(),
//!     title: format!("Episode {}", id),
//!     members: "Diego Fernandes".to_string(),
//!     thumbnail_url: format!("https://example.com/{}.jpg", id),
//!     audio_url: format!("https://example.com/{}.m4a", id),
//!     duration_seconds: 1800,
//!     published_at: "22 jan 21".to_string(),
//!     description: None,
//! };
//!
//! let mut session = PlaybackSession::default();
//! session.play_list(vec![episode("a"), episode("b"), episode("c")], 1).unwrap();
//! assert!(session.is_playing());
//!
//! session.toggle_loop();
//! assert_eq!(session.on_episode_ended(), EndedOutcome::Restart);
//!
//! session.toggle_loop();
//! assert_eq!(session.on_episode_ended(), EndedOutcome::Advanced(2));
//! assert_eq!(session.on_episode_ended(), EndedOutcome::Cleared);
//! assert!(session.is_empty());
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use podcastr_core::{AudioOutput, DeviceEvent};
//! use podcastr_playback::{PlaybackSession, Player, PlayerConfig};
//!
//! struct MyDevice;
//!
//! impl AudioOutput for MyDevice {
//!     fn load(&mut self, _url: &str) -> podcastr_core::Result<()> { Ok(()) }
//!     fn play(&mut self) -> podcastr_core::Result<()> { Ok(()) }
//!     fn pause(&mut self) -> podcastr_core::Result<()> { Ok(()) }
//!     fn seek(&mut self, _seconds: u64) -> podcastr_core::Result<()> { Ok(()) }
//!     fn set_looping(&mut self, _looping: bool) -> podcastr_core::Result<()> { Ok(()) }
//!     fn position(&self) -> u64 { 0 }
//! }
//!
//! let mut player = Player::new(PlaybackSession::default(), MyDevice, PlayerConfig::default());
//!
//! // Forward device signals as they arrive
//! player.handle_device_event(DeviceEvent::TimeUpdate(12)).ok();
//! player.handle_device_event(DeviceEvent::Ended).ok();
//! ```

mod error;
mod events;
pub mod navigation;
mod player;
mod session;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::SessionEvent;
pub use player::{Player, PlayerConfig};
pub use session::PlaybackSession;
pub use types::{Controls, EndedOutcome, SessionConfig, SessionSnapshot};
