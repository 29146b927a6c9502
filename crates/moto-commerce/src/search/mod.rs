//! Search module.
//!
//! Contains the query state, the pure filter/sort pipeline, recent-search
//! history, and the stateful catalog browser.

mod browser;
mod filter;
mod history;
mod query;

pub use browser::CatalogBrowser;
pub use filter::{compute_filtered_catalog, filter_by_category, filter_by_price_range, search, sort};
pub use history::{SearchHistory, MAX_HISTORY, SEARCH_HISTORY_KEY};
pub use query::{CategoryChoice, PriceRange, QueryState, SortOption};
