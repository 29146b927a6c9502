//! Recent searches.

use moto_cache::Cache;

/// Storage key holding the serialized history.
pub const SEARCH_HISTORY_KEY: &str = "motoparts_search_history";

/// Default number of remembered terms.
pub const MAX_HISTORY: usize = 5;

/// Most-recent-first list of distinct search terms.
///
/// Terms are compared case-insensitively; the latest casing wins.
#[derive(Debug, Clone)]
pub struct SearchHistory {
    terms: Vec<String>,
    limit: usize,
    cache: Cache,
    key: String,
}

impl SearchHistory {
    /// Restore history from the default key with the default limit.
    pub fn open(cache: Cache) -> Self {
        Self::open_with(cache, SEARCH_HISTORY_KEY, MAX_HISTORY)
    }

    /// Restore history from `key`, keeping at most `limit` terms.
    ///
    /// A missing or malformed payload yields an empty history.
    pub fn open_with(cache: Cache, key: impl Into<String>, limit: usize) -> Self {
        let key = key.into();
        let mut terms: Vec<String> = cache.load_or_default(&key);
        terms.truncate(limit);
        Self {
            terms,
            limit,
            cache,
            key,
        }
    }

    /// Record a search. Blank terms are ignored.
    ///
    /// The term is trimmed, any case-insensitive duplicate is dropped, the
    /// term goes to the front, and the list is cut to the limit.
    pub fn save(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }

        let lowered = term.to_lowercase();
        self.terms.retain(|t| t.to_lowercase() != lowered);
        self.terms.insert(0, term.to_string());
        self.terms.truncate(self.limit);

        tracing::debug!(term, len = self.terms.len(), "search saved to history");
        if let Err(e) = self.cache.set(&self.key, &self.terms) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist search history");
        }
    }

    /// Forget every term and delete the stored key.
    pub fn clear(&mut self) {
        self.terms.clear();
        if let Err(e) = self.cache.delete(&self.key) {
            tracing::warn!(key = %self.key, error = %e, "failed to delete search history");
        }
    }

    /// Terms, most recent first.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
