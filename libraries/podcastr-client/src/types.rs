//! Types for the episodes API and its configuration.

use crate::error::{ClientError, Result};
use chrono::Locale;
use podcastr_core::format::{format_published_at, DEFAULT_LOCALE};
use podcastr_core::Episode;
use serde::Deserialize;

/// Configuration for connecting to the episodes API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API (e.g., "http://localhost:3333")
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Locale used to render publish dates
    pub date_locale: Locale,
}

impl ApiConfig {
    /// Create a new config with just the URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
            date_locale: DEFAULT_LOCALE,
        }
    }

    /// Use a different locale for publish dates.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.date_locale = locale;
        self
    }

    /// Use a different request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// Episode record as served by the API.
#[derive(Debug, Deserialize)]
pub struct EpisodeRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub members: String,
    pub published_at: Option<String>,
    #[serde(default)]
    pub thumbnail: String,
    pub description: Option<String>,
    pub file: Option<EpisodeFile>,
}

/// Audio file attached to an episode record.
#[derive(Debug, Deserialize)]
pub struct EpisodeFile {
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    pub duration: Option<RawDuration>,
}

/// Duration as the API may send it: a number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Seconds(u64),
    Fractional(f64),
    Text(String),
}

impl RawDuration {
    /// Whole seconds, or None for negative or non-numeric values
    pub fn as_seconds(&self) -> Option<u64> {
        match self {
            RawDuration::Seconds(secs) => Some(*secs),
            RawDuration::Fractional(secs) => {
                (secs.is_finite() && *secs >= 0.0).then(|| secs.trunc() as u64)
            }
            RawDuration::Text(text) => text.trim().parse::<u64>().ok(),
        }
    }
}

impl EpisodeRecord {
    /// Map a wire record into a playable episode.
    ///
    /// Fails when the audio file, its URL, its duration or the publish date
    /// is missing or unusable.
    pub fn into_episode(self, locale: Locale) -> Result<Episode> {
        let malformed = |id: &str, reason: &str| ClientError::MalformedEpisode {
            id: id.to_string(),
            reason: reason.to_string(),
        };

        let file = self
            .file
            .ok_or_else(|| malformed(&self.id, "missing file"))?;

        let audio_url = file
            .url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| malformed(&self.id, "missing file url"))?;

        let duration_seconds = file
            .duration
            .as_ref()
            .ok_or_else(|| malformed(&self.id, "missing duration"))?
            .as_seconds()
            .ok_or_else(|| malformed(&self.id, "duration is not a number of seconds"))?;

        let raw_date = self
            .published_at
            .ok_or_else(|| malformed(&self.id, "missing published_at"))?;
        let published_at = format_published_at(&raw_date, locale)
            .map_err(|e| malformed(&self.id, &e.to_string()))?;

        let episode = Episode {
            id: self.id,
            title: self.title,
            members: self.members,
            thumbnail_url: self.thumbnail,
            audio_url,
            duration_seconds,
            published_at,
            description: self.description,
        };

        episode
            .validate()
            .map_err(|e| malformed(&episode.id, &e.to_string()))?;

        Ok(episode)
    }
}
