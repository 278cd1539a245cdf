//! Error types for playback sessions

use podcastr_core::CoreError;
use thiserror::Error;

/// Playback errors
///
/// All variants are recoverable by the rendering layer: disable the control
/// or ignore the call. A failed command never leaves the session changed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Start index does not point into the supplied episode list
    #[error("Invalid argument: start index {index} out of range for {len} episodes")]
    InvalidArgument { index: usize, len: usize },

    /// No episodes are loaded
    #[error("Queue is empty")]
    EmptyQueue,

    /// Navigation blocked by a boundary rule
    #[error("Not possible: {0}")]
    NotPossible(&'static str),

    /// Audio output device rejected a command
    #[error(transparent)]
    Output(#[from] CoreError),
}

impl PlaybackError {
    /// Whether this is a boundary-rule rejection the UI should have prevented
    pub fn is_not_possible(&self) -> bool {
        matches!(self, Self::NotPossible(_))
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
