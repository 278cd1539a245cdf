/// CLI error types
use podcastr_client::ClientError;
use podcastr_core::CoreError;
use podcastr_playback::PlaybackError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Episode index {index} is out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No episodes available")]
    NoEpisodes,

    #[error("API error: {0}")]
    Client(#[from] ClientError),

    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
