//! Storefront core for the motoparts shop.
//!
//! Two independent units, both persisting through a [`moto_cache::Cache`]:
//!
//! - **Cart**: [`CartStore`] owns the shopper's cart lines, derived totals
//!   and the cart panel's visibility flag.
//! - **Search**: pure query functions over a static [`Catalog`], a bounded
//!   [`SearchHistory`], and [`CatalogBrowser`] which owns the live query
//!   state.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use moto_cache::{Cache, MemoryStore};
//! use moto_commerce::prelude::*;
//!
//! let cache = Cache::new(Arc::new(MemoryStore::new()));
//! let catalog = Catalog::motoparts();
//!
//! let mut cart = CartStore::open(cache.clone());
//! let pad = catalog.get(ProductId::new(2)).unwrap();
//! cart.add_to_cart(pad);
//! cart.add_to_cart(pad);
//! assert_eq!(cart.total_items(), 2);
//!
//! let mut query = QueryState::for_catalog(&catalog);
//! query.term = "exhaust".to_string();
//! let results = compute_filtered_catalog(&catalog, &query);
//! assert!(results.iter().all(|p| p.category == Category::Exhaust));
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod observe;

pub mod catalog;
pub mod cart;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

pub use catalog::{Catalog, Category, Product};
pub use cart::{CartEvent, CartLine, CartSnapshot, CartStore, CartSummary};
pub use search::{
    compute_filtered_catalog, CatalogBrowser, CategoryChoice, PriceRange, QueryState,
    SearchHistory, SortOption,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::observe::Observers;

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{CartEvent, CartLine, CartSnapshot, CartStore, CartSummary};

    // Search
    pub use crate::search::{
        compute_filtered_catalog, filter_by_category, filter_by_price_range, search, sort,
        CatalogBrowser, CategoryChoice, PriceRange, QueryState, SearchHistory, SortOption,
    };
}
