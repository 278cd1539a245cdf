//! Podcastr Core
//!
//! Platform-agnostic episode model, formatting helpers, and the traits that
//! describe Podcastr's external collaborators.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Episode`, `EpisodeFilters`
//! - **Collaborator Traits**: `EpisodeSource` (metadata provider), `AudioOutput` (device)
//! - **Formatting**: duration and publish-date strings for display
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use podcastr_core::{format::duration_to_time_string, Episode};
//!
//! let episode = Episode {
//!     id: "a-importancia-da-contribuicao-em-open-source".to_string(),
//!     title: "Faladev #30 | A importância da contribuição em Open Source".to_string(),
//!     members: "Diego Fernandes, João Pedro".to_string(),
//!     thumbnail_url: "https://example.com/opensource.jpg".to_string(),
//!     audio_url: "https://example.com/opensource.m4a".to_string(),
//!     duration_seconds: 3981,
//!     published_at: "22 jan 21".to_string(),
//!     description: None,
//! };
//!
//! assert!(episode.validate().is_ok());
//! assert_eq!(duration_to_time_string(episode.duration_seconds), "01:06:21");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod traits;
pub mod types;

pub use error::{CoreError, Result};
pub use traits::{AudioOutput, DeviceEvent, EpisodeSource};
pub use types::{Episode, EpisodeFilters, SortField, SortOrder};
