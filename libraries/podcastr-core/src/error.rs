/// Core error types for Podcastr
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Podcastr
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Episode record is missing a required field or carries an unusable value
    #[error("Invalid episode: {0}")]
    InvalidEpisode(String),

    /// Publish date could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Episode source failed to deliver episodes
    #[error("Episode source error: {0}")]
    Source(String),

    /// Audio output device rejected a command
    #[error("Audio output error: {0}")]
    Output(String),
}

impl CoreError {
    /// Create an invalid episode error
    pub fn invalid_episode(msg: impl Into<String>) -> Self {
        Self::InvalidEpisode(msg.into())
    }

    /// Create an episode source error
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Create an audio output error
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}
