//! Error types for the episodes API client.

use podcastr_core::CoreError;
use thiserror::Error;

/// Errors that can occur when fetching episodes.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Episode does not exist
    #[error("Episode not found: {0}")]
    NotFound(String),

    /// Invalid API URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// A record is missing a field playback depends on
    #[error("Malformed episode {id}: {reason}")]
    MalformedEpisode { id: String, reason: String },

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl From<ClientError> for CoreError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::MalformedEpisode { id, reason } => {
                CoreError::invalid_episode(format!("{}: {}", id, reason))
            }
            other => CoreError::source(other.to_string()),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
