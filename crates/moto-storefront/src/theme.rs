//! Light/dark theme preference.

use std::fmt;
use std::sync::Arc;

use moto_cache::KeyValueStore;

/// Colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Interpret a stored value. Empty or `"dark"` means dark, anything
    /// else light.
    fn from_saved(saved: &str) -> Self {
        if saved.is_empty() || saved == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted theme choice, stored as the raw string `"dark"` or `"light"`.
pub struct ThemePreference {
    current: Theme,
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl ThemePreference {
    /// Read the saved preference. Nothing saved means dark.
    pub fn load(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = match store.get(&key) {
            Ok(Some(saved)) => Theme::from_saved(&saved),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to read theme preference");
                Theme::default()
            }
        };
        Self {
            current,
            store,
            key,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn is_dark(&self) -> bool {
        self.current == Theme::Dark
    }

    /// Switch to the other theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }

    /// Set and persist a theme.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        if let Err(e) = self.store.set(&self.key, theme.as_str()) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist theme preference");
        }
    }
}

impl fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePreference")
            .field("current", &self.current)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
