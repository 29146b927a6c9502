//! Racing news feed with a time-boxed cache.
//!
//! The feed is served from the cache while it is younger than the TTL.
//! Otherwise the source is asked again; if that fails the last cached
//! articles are shown alongside an error message.

use chrono::{DateTime, Duration, Utc};
use moto_cache::Cache;
use serde::{Deserialize, Serialize};

use crate::error::NewsError;

/// Message shown when a refresh fails.
pub const NEWS_ERROR_MESSAGE: &str = "Unable to load news. Please try again later.";

/// A news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub source: ArticleSource,
}

/// Publisher of an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub name: String,
}

/// Cached feed payload: the articles and when they were fetched (epoch ms).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsCacheEntry {
    pub data: Vec<Article>,
    pub timestamp: i64,
}

/// Somewhere articles come from.
pub trait NewsSource {
    fn fetch(&self, now: DateTime<Utc>) -> Result<Vec<Article>, NewsError>;
}

/// Fixed set of three articles dated today, yesterday, and two days ago.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockNewsSource;

impl NewsSource for MockNewsSource {
    fn fetch(&self, now: DateTime<Utc>) -> Result<Vec<Article>, NewsError> {
        let article = |title: &str, description: &str, days_ago: i64, source: &str| Article {
            title: title.to_string(),
            description: description.to_string(),
            url: "#".to_string(),
            url_to_image: None,
            published_at: now - Duration::days(days_ago),
            source: ArticleSource {
                name: source.to_string(),
            },
        };

        Ok(vec![
            article(
                "MotoGP 2024: Revolutionary Aerodynamic Innovations",
                "New carbon fiber fairings and winglet designs are pushing the boundaries of motorcycle racing performance.",
                0,
                "Racing Weekly",
            ),
            article(
                "Electric Motorcycles Break Speed Records",
                "The latest electric superbikes are challenging traditional combustion engines in track performance.",
                1,
                "Moto News",
            ),
            article(
                "Suspension Technology: What's Next?",
                "Active suspension systems are becoming more accessible for everyday riders.",
                2,
                "Tech Riders",
            ),
        ])
    }
}

/// What the news section should show.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsState {
    pub articles: Vec<Article>,
    /// Set when a refresh failed.
    pub error: Option<String>,
    /// True when `articles` came from the cache rather than the source.
    pub from_cache: bool,
}

/// News feed over a source and a cache entry.
#[derive(Debug)]
pub struct NewsFeed<S> {
    source: S,
    cache: Cache,
    key: String,
    ttl: Duration,
}

impl<S: NewsSource> NewsFeed<S> {
    pub fn new(source: S, cache: Cache, key: impl Into<String>, ttl: Duration) -> Self {
        Self {
            source,
            cache,
            key: key.into(),
            ttl,
        }
    }

    /// Serve the cached feed if it is fresh, otherwise refresh.
    pub fn load(&self, now: DateTime<Utc>) -> NewsState {
        if let Some(entry) = self.cached_entry() {
            let age_ms = now.timestamp_millis() - entry.timestamp;
            if age_ms < self.ttl.num_milliseconds() {
                tracing::debug!(age_ms, "serving cached news");
                return NewsState {
                    articles: entry.data,
                    error: None,
                    from_cache: true,
                };
            }
        }
        self.refresh(now)
    }

    /// Fetch from the source, falling back to any cached articles on failure.
    pub fn refresh(&self, now: DateTime<Utc>) -> NewsState {
        match self.source.fetch(now) {
            Ok(articles) => {
                let entry = NewsCacheEntry {
                    data: articles,
                    timestamp: now.timestamp_millis(),
                };
                if let Err(e) = self.cache.set(&self.key, &entry) {
                    tracing::warn!(key = %self.key, error = %e, "failed to cache news");
                }
                NewsState {
                    articles: entry.data,
                    error: None,
                    from_cache: false,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "news refresh failed");
                let cached = self.cached_entry();
                NewsState {
                    from_cache: cached.is_some(),
                    articles: cached.map(|c| c.data).unwrap_or_default(),
                    error: Some(NEWS_ERROR_MESSAGE.to_string()),
                }
            }
        }
    }

    fn cached_entry(&self) -> Option<NewsCacheEntry> {
        match self.cache.get(&self.key) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "ignoring unreadable news cache");
                None
            }
        }
    }
}
