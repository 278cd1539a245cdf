//! Core domain types

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A podcast episode ready for playback and display
///
/// Immutable once constructed. Display fields (`published_at`) are
/// precomputed by the episode source so nothing is formatted during playback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Unique episode identifier
    pub id: String,

    /// Episode title
    pub title: String,

    /// Hosts and guests, as a display string
    pub members: String,

    /// Cover image locator
    pub thumbnail_url: String,

    /// Audio stream locator
    pub audio_url: String,

    /// Total playback length in seconds
    pub duration_seconds: u64,

    /// Display-formatted publish date
    pub published_at: String,

    /// Long-form description (HTML as delivered by the API)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Episode {
    /// Total playback length
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_seconds)
    }

    /// Check the fields playback depends on
    ///
    /// An episode without an id or an audio locator can never be played,
    /// so it is rejected before it reaches a queue.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(CoreError::invalid_episode("episode id is empty"));
        }
        if self.audio_url.trim().is_empty() {
            return Err(CoreError::invalid_episode(format!(
                "episode {} has no audio url",
                self.id
            )));
        }
        Ok(())
    }
}

/// Field the episode listing is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    PublishedAt,
    Title,
    Duration,
}

impl SortField {
    /// Name of the field as the episodes API expects it
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::PublishedAt => "published_at",
            SortField::Title => "title",
            SortField::Duration => "file.duration",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter parameters passed to an episode source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeFilters {
    /// Maximum number of episodes (None = everything the source has)
    pub limit: Option<usize>,

    /// Sort field (default: publish date)
    pub sort: SortField,

    /// Sort direction (default: newest first)
    pub order: SortOrder,
}

impl Default for EpisodeFilters {
    fn default() -> Self {
        Self {
            limit: Some(12),
            sort: SortField::PublishedAt,
            order: SortOrder::Desc,
        }
    }
}

impl EpisodeFilters {
    /// Default filters with a different limit
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }
}
