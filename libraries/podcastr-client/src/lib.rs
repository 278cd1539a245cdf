//! Podcastr API Client
//!
//! HTTP client for the Podcastr episodes API, a json-server style backend
//! serving `GET /episodes` and `GET /episodes/{id}`.
//!
//! # Features
//!
//! - **Episode list**: sorted, limited fetch mapped into playable episodes
//! - **Episode detail**: single episode lookup by id
//! - **Listing**: latest releases split and row to queue index mapping
//!
//! # Example
//!
//! ```ignore
//! use podcastr_client::{ApiConfig, EpisodeClient, EpisodeListing};
//! use podcastr_core::EpisodeFilters;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EpisodeClient::new(ApiConfig::new("http://localhost:3333"))?;
//!     let episodes = client.fetch_episodes(&EpisodeFilters::default()).await?;
//!
//!     let listing = EpisodeListing::split(episodes, 2);
//!     println!("{} latest, {} more", listing.latest.len(), listing.all.len());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod listing;
mod types;

pub use client::EpisodeClient;
pub use error::{ClientError, Result};
pub use listing::{EpisodeListing, Section, DEFAULT_LATEST_COUNT};
pub use types::{ApiConfig, EpisodeFile, EpisodeRecord, RawDuration};
