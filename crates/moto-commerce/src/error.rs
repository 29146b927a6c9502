//! Commerce error types.

use moto_cache::CacheError;
use thiserror::Error;

use crate::money::Money;

/// Errors that can occur in storefront operations.
///
/// Cart mutations and catalog queries are total; these errors come from
/// constructing inputs (catalogs, category names, price ranges) and from
/// direct persistence access.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Category name outside the fixed set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Sort option string not recognised.
    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    /// Price range with min above max.
    #[error("Invalid price range: {min} > {max}")]
    InvalidPriceRange { min: Money, max: Money },

    /// Catalog failed validation.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
