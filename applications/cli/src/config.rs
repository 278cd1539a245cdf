/// CLI configuration
use crate::error::{CliError, Result};
use podcastr_client::{ApiConfig, DEFAULT_LATEST_COUNT};
use podcastr_core::format::parse_locale;
use podcastr_core::EpisodeFilters;
use podcastr_playback::{PlayerConfig, SessionConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "podcastr.toml";

/// Prefix for environment overrides, e.g. `PODCASTR_API__BASE_URL`
pub const ENV_PREFIX: &str = "PODCASTR";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PodcastrConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,

    #[serde(default = "default_display")]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_limit")]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default)]
    pub shuffle_seed: Option<u64>,

    #[serde(default = "default_autoplay")]
    pub autoplay: bool,

    /// Wall-clock length of one simulated second
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplaySettings {
    #[serde(default = "default_date_locale")]
    pub date_locale: String,

    #[serde(default = "default_latest_count")]
    pub latest_count: usize,
}

impl Default for PodcastrConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            playback: default_playback(),
            display: default_display(),
        }
    }
}

impl PodcastrConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `podcastr.toml` is read when
    /// present in the working directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, environment())
    }

    /// Load with a caller-supplied environment source
    pub fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(env);

        let config: Self = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(CliError::Config(
                "API base URL is required (set PODCASTR_API__BASE_URL)".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 {
            return Err(CliError::Config(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.playback.tick_millis == 0 {
            return Err(CliError::Config(
                "playback.tick_millis must be greater than zero".to_string(),
            ));
        }

        parse_locale(&self.display.date_locale)?;

        Ok(())
    }

    /// Connection settings for the episodes client
    pub fn api_config(&self) -> Result<ApiConfig> {
        let locale = parse_locale(&self.display.date_locale)?;
        Ok(ApiConfig::new(self.api.base_url.clone())
            .with_timeout(self.api.timeout_secs)
            .with_locale(locale))
    }

    /// Filters for the home page fetch
    pub fn filters(&self) -> EpisodeFilters {
        EpisodeFilters::with_limit(self.api.limit)
    }

    /// Session settings, with a command-line seed taking precedence
    pub fn session_config(&self, seed: Option<u64>, looping: bool, shuffling: bool) -> SessionConfig {
        SessionConfig {
            shuffle_seed: seed.or(self.playback.shuffle_seed),
            start_looping: looping,
            start_shuffling: shuffling,
        }
    }

    pub fn player_config(&self) -> PlayerConfig {
        PlayerConfig {
            autoplay: self.playback.autoplay,
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.playback.tick_millis)
    }
}

/// Environment source for `PODCASTR_SECTION__FIELD` variables
pub fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        timeout_secs: default_timeout_secs(),
        limit: default_limit(),
    }
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_limit() -> Option<usize> {
    EpisodeFilters::default().limit
}

fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        shuffle_seed: None,
        autoplay: default_autoplay(),
        tick_millis: default_tick_millis(),
    }
}

fn default_autoplay() -> bool {
    true
}

fn default_tick_millis() -> u64 {
    1000
}

fn default_display() -> DisplaySettings {
    DisplaySettings {
        date_locale: default_date_locale(),
        latest_count: default_latest_count(),
    }
}

fn default_date_locale() -> String {
    "pt_BR".to_string()
}

fn default_latest_count() -> usize {
    DEFAULT_LATEST_COUNT
}
