//! HTTP client for the episodes API.

use crate::error::{ClientError, Result};
use crate::types::{ApiConfig, EpisodeRecord};
use async_trait::async_trait;
use chrono::Locale;
use podcastr_core::{Episode, EpisodeFilters, EpisodeSource};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Client for a json-server style episodes API.
///
/// # Example
///
/// ```ignore
/// use podcastr_client::{ApiConfig, EpisodeClient};
/// use podcastr_core::EpisodeFilters;
///
/// let client = EpisodeClient::new(ApiConfig::new("http://localhost:3333"))?;
/// let episodes = client.fetch_episodes(&EpisodeFilters::default()).await?;
/// println!("Fetched {} episodes", episodes.len());
/// ```
#[derive(Debug, Clone)]
pub struct EpisodeClient {
    http: Client,
    base_url: String,
    locale: Locale,
}

impl EpisodeClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        if config.timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "timeout must be at least one second".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs.min(10)))
            .user_agent(format!("Podcastr/{} (CLI)", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            base_url,
            locale: config.date_locale,
        })
    }

    /// Get the normalized API URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the episode list, sorted and limited per `filters`.
    ///
    /// Every record is mapped before anything is returned, so one malformed
    /// record fails the whole fetch.
    pub async fn fetch_episodes(&self, filters: &EpisodeFilters) -> Result<Vec<Episode>> {
        let url = self.episodes_url(filters)?;
        debug!(url = %url, "Fetching episodes");

        let response = self.send(url).await?;
        let response = Self::check_status(response, None).await?;

        let records: Vec<EpisodeRecord> = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse episode list: {}", e))
        })?;

        let episodes = records
            .into_iter()
            .map(|record| record.into_episode(self.locale))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| {
                warn!(error = %e, "Rejecting episode list");
                e
            })?;

        info!(count = episodes.len(), "Fetched episodes");
        Ok(episodes)
    }

    /// Fetch a single episode by id.
    pub async fn fetch_episode(&self, id: &str) -> Result<Episode> {
        let mut url = self.endpoint()?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push("episodes")
            .push(id);

        debug!(url = %url, "Fetching episode");

        let response = self.send(url).await?;
        let response = Self::check_status(response, Some(id)).await?;

        let record: EpisodeRecord = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse episode: {}", e)))?;

        record.into_episode(self.locale)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn endpoint(&self) -> Result<Url> {
        Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }

    fn episodes_url(&self, filters: &EpisodeFilters) -> Result<Url> {
        let mut url = self.endpoint()?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push("episodes");

        {
            let mut query = url.query_pairs_mut();
            if let Some(limit) = filters.limit {
                query.append_pair("_limit", &limit.to_string());
            }
            query
                .append_pair("_sort", filters.sort.as_str())
                .append_pair("_order", filters.order.as_str());
        }

        Ok(url)
    }

    async fn send(&self, url: Url) -> Result<Response> {
        self.http.get(url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })
    }

    async fn check_status(response: Response, id: Option<&str>) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
            return Err(ClientError::NotFound(id.to_string()));
        }

        let message = response.text().await.unwrap_or_default();
        Err(ClientError::ServerError {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl EpisodeSource for EpisodeClient {
    async fn fetch_episodes(&self, filters: &EpisodeFilters) -> podcastr_core::Result<Vec<Episode>> {
        EpisodeClient::fetch_episodes(self, filters)
            .await
            .map_err(Into::into)
    }
}
