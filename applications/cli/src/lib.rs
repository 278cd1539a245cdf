//! Podcastr CLI Library
//!
//! Terminal rendering layer for Podcastr: configuration, a simulated audio
//! device, text rendering and the interactive player loop.
//!
//! This library exposes the components used by the `podcastr` binary for
//! testing purposes.

pub mod config;
pub mod error;
pub mod interactive;
pub mod output;
pub mod render;
pub mod start;

// Re-export commonly used types for convenience
pub use config::PodcastrConfig;
pub use error::{CliError, Result};
pub use interactive::{Command, Flow};
pub use output::SimulatedOutput;
pub use start::StartAt;
