//! Error types for the storefront layer.

use thiserror::Error;

/// Failure fetching news articles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NewsError {
    /// The source could not be reached.
    #[error("News source unavailable: {0}")]
    Unavailable(String),
}
