//! Motoparts storefront.
//!
//! Wires the cart store and catalog browser from `moto-commerce` to one
//! shared key-value store, and adds the collaborators around them:
//!
//! - [`ThemePreference`]: persisted light/dark choice
//! - [`NewsFeed`]: cache-or-fetch racing news
//! - [`ContactForm`]: field validation for the contact page
//! - [`Storefront::checkout`]: checkout placeholder
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use moto_cache::MemoryStore;
//! use moto_commerce::{Catalog, ProductId};
//! use moto_storefront::{Storefront, StorefrontConfig};
//!
//! let mut shop = Storefront::new(
//!     StorefrontConfig::default(),
//!     Arc::new(MemoryStore::new()),
//!     Catalog::motoparts(),
//! );
//!
//! let pads = shop.browser().catalog().get(ProductId::new(2)).cloned().unwrap();
//! shop.cart_mut().add_to_cart(&pads);
//! assert_eq!(shop.checkout().total_items, 1);
//! ```

pub mod config;
pub mod contact;
pub mod error;
pub mod news;
pub mod storefront;
pub mod theme;

pub use config::StorefrontConfig;
pub use contact::{ContactForm, ContactMessage, Field, FieldErrors};
pub use error::NewsError;
pub use news::{Article, MockNewsSource, NewsFeed, NewsSource, NewsState};
pub use storefront::Storefront;
pub use theme::{Theme, ThemePreference};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StorefrontConfig;
    pub use crate::contact::{ContactForm, Field};
    pub use crate::error::NewsError;
    pub use crate::news::{NewsFeed, NewsSource, NewsState};
    pub use crate::storefront::Storefront;
    pub use crate::theme::{Theme, ThemePreference};
    pub use moto_commerce::prelude::*;
}
