//! Composition root.

use std::sync::Arc;

use anyhow::Result;
use chrono::Duration;
use moto_cache::{Cache, KeyValueStore};
use moto_commerce::{Catalog, CartStore, CartSummary, CatalogBrowser, SearchHistory};

use crate::config::{StorefrontConfig, DEFAULT_NEWS_TTL_SECS};
use crate::contact::ContactForm;
use crate::news::{MockNewsSource, NewsFeed, NewsSource};
use crate::theme::ThemePreference;

/// Every stateful piece of the shop, built once over one key-value store.
///
/// Nothing here is global: callers own the `Storefront` and pass `&` or
/// `&mut` access to whatever renders it.
pub struct Storefront<S = MockNewsSource> {
    config: StorefrontConfig,
    cart: CartStore,
    browser: CatalogBrowser,
    theme: ThemePreference,
    news: NewsFeed<S>,
    contact: ContactForm,
}

impl Storefront<MockNewsSource> {
    /// Build the shop with the mock news source.
    pub fn new(config: StorefrontConfig, store: Arc<dyn KeyValueStore>, catalog: Catalog) -> Self {
        Self::with_news_source(config, store, catalog, MockNewsSource)
    }

    /// Load config from `path` and build the shop over the seed catalog.
    pub fn from_config_file(path: &str, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let config = StorefrontConfig::load(path)?;
        Ok(Self::new(config, store, Catalog::motoparts()))
    }
}

impl<S: NewsSource> Storefront<S> {
    pub fn with_news_source(
        config: StorefrontConfig,
        store: Arc<dyn KeyValueStore>,
        catalog: Catalog,
        source: S,
    ) -> Self {
        let cache = Cache::new(Arc::clone(&store));
        let keys = &config.storage;

        let cart = CartStore::open_with_key(cache.clone(), keys.cart_key.as_str());
        let history = SearchHistory::open_with(
            cache.clone(),
            keys.search_history_key.as_str(),
            config.search.history_limit,
        );
        let browser = CatalogBrowser::new(Arc::new(catalog), history);
        let theme = ThemePreference::load(store, keys.theme_key.as_str());
        let ttl = config.news.cache_ttl().unwrap_or_else(|| {
            tracing::warn!(
                cache_ttl_secs = config.news.cache_ttl_secs,
                "unusable news cache ttl, using the default"
            );
            Duration::seconds(DEFAULT_NEWS_TTL_SECS)
        });
        let news = NewsFeed::new(source, cache, keys.news_cache_key.as_str(), ttl);

        tracing::info!(
            products = browser.catalog().len(),
            cart_items = cart.total_items(),
            theme = %theme.current(),
            "storefront ready"
        );

        Self {
            config,
            cart,
            browser,
            theme,
            news,
            contact: ContactForm::new(),
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn browser(&self) -> &CatalogBrowser {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut CatalogBrowser {
        &mut self.browser
    }

    pub fn theme(&self) -> &ThemePreference {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemePreference {
        &mut self.theme
    }

    pub fn news(&self) -> &NewsFeed<S> {
        &self.news
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    /// Checkout placeholder: log the cart totals and hand them back.
    ///
    /// No order is created and the cart is left as it is.
    pub fn checkout(&self) -> CartSummary {
        let summary = self.cart.summary();
        tracing::info!(
            items = summary.total_items,
            total = %summary.total_price,
            "checkout requested"
        );
        summary
    }
}

impl<S> std::fmt::Debug for Storefront<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("config", &self.config)
            .field("cart", &self.cart)
            .field("browser", &self.browser)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moto_cache::MemoryStore;
    use moto_commerce::{Money, ProductId, SortOption};

    fn storefront(store: &MemoryStore) -> Storefront {
        Storefront::new(
            StorefrontConfig::default(),
            Arc::new(store.clone()),
            Catalog::motoparts(),
        )
    }

    #[test]
    fn test_checkout_does_not_clear_cart() {
        let store = MemoryStore::new();
        let mut shop = storefront(&store);
        let rotor = shop.browser().catalog().get(ProductId::new(8)).cloned().unwrap();

        shop.cart_mut().add_to_cart(&rotor);
        shop.cart_mut().add_to_cart(&rotor);

        let summary = shop.checkout();
        assert_eq!(summary.total_items, 2);
        assert_eq!(summary.total_price, Money::from_decimal(599.98));
        assert_eq!(shop.cart().total_items(), 2);
    }

    #[test]
    fn test_configured_keys_are_used() {
        let store = MemoryStore::new();
        let mut config = StorefrontConfig::default();
        config.storage.cart_key = "shop_a_cart".to_string();
        config.storage.theme_key = "shop_a_theme".to_string();

        let mut shop = Storefront::new(config, Arc::new(store.clone()), Catalog::motoparts());
        let product = shop.browser().catalog().products()[0].clone();
        shop.cart_mut().add_to_cart(&product);
        shop.theme_mut().toggle();

        assert!(store.exists("shop_a_cart").unwrap());
        assert_eq!(store.get("shop_a_theme").unwrap().as_deref(), Some("light"));
        assert!(!store.exists("motoparts_cart").unwrap());
    }

    #[test]
    fn test_unusable_ttl_falls_back_to_default() {
        let store = MemoryStore::new();
        let mut config = StorefrontConfig::default();
        config.news.cache_ttl_secs = i64::MIN;

        let shop = Storefront::new(config, Arc::new(store), Catalog::motoparts());
        let now = chrono::Utc::now();
        assert!(!shop.news().load(now).from_cache);
        assert!(shop.news().load(now + Duration::minutes(30)).from_cache);
        assert!(!shop.news().load(now + Duration::minutes(61)).from_cache);
    }

    #[test]
    fn test_components_share_one_store() {
        let store = MemoryStore::new();
        let mut shop = storefront(&store);
        shop.browser_mut().set_term("brake");
        shop.browser_mut().commit_search();
        shop.browser_mut().set_sort(SortOption::PriceAsc);
        shop.news().load(chrono::Utc::now());

        let keys = store.keys().unwrap();
        assert_eq!(keys, vec!["motoparts_news_cache", "motoparts_search_history"]);
    }
}
