//! Storefront configuration.

use anyhow::{bail, Context, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};

use moto_commerce::cart::CART_STORAGE_KEY;
use moto_commerce::search::{MAX_HISTORY, SEARCH_HISTORY_KEY};

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Storage keys.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Search settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// News feed settings.
    #[serde(default)]
    pub news: NewsConfig,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path))?;
        Ok(config)
    }

    /// Check values that parse but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.news.cache_ttl().is_none() {
            bail!(
                "news.cache_ttl_secs must be between 0 and {} seconds, got {}",
                Duration::MAX.num_seconds(),
                self.news.cache_ttl_secs
            );
        }
        Ok(())
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Key names in the key-value store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_cart_key")]
    pub cart_key: String,

    #[serde(default = "default_search_history_key")]
    pub search_history_key: String,

    #[serde(default = "default_theme_key")]
    pub theme_key: String,

    #[serde(default = "default_news_cache_key")]
    pub news_cache_key: String,
}

fn default_cart_key() -> String {
    CART_STORAGE_KEY.to_string()
}

fn default_search_history_key() -> String {
    SEARCH_HISTORY_KEY.to_string()
}

/// Namespace shared by every storefront key.
const KEY_PREFIX: &str = "motoparts";

fn default_theme_key() -> String {
    moto_cache::cache_key!(KEY_PREFIX, "theme")
}

fn default_news_cache_key() -> String {
    moto_cache::cache_key!(KEY_PREFIX, "news", "cache")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cart_key: default_cart_key(),
            search_history_key: default_search_history_key(),
            theme_key: default_theme_key(),
            news_cache_key: default_news_cache_key(),
        }
    }
}

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of recent searches kept.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_history_limit() -> usize {
    MAX_HISTORY
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}

/// News feed configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsConfig {
    /// Age in seconds below which the cached feed is served without fetching.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: i64,
}

/// Default news cache lifetime: one hour.
pub const DEFAULT_NEWS_TTL_SECS: i64 = 3600;

fn default_cache_ttl_secs() -> i64 {
    DEFAULT_NEWS_TTL_SECS
}

impl NewsConfig {
    /// The cache lifetime. `None` when negative or beyond what a
    /// [`Duration`] can hold.
    pub fn cache_ttl(&self) -> Option<Duration> {
        if self.cache_ttl_secs < 0 {
            return None;
        }
        Duration::try_seconds(self.cache_ttl_secs)
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}
