//! Live catalog view: query state plus search history over a fixed catalog.

use std::sync::Arc;

use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::SubscriptionId;
use crate::money::Money;
use crate::observe::Observers;
use crate::search::{
    compute_filtered_catalog, CategoryChoice, PriceRange, QueryState, SearchHistory, SortOption,
};

/// Owns the query state for one listing and recomputes results on demand.
///
/// Results are never cached; every call to [`CatalogBrowser::results`]
/// scans the full catalog. Listeners are told the new query state after
/// each change.
pub struct CatalogBrowser {
    catalog: Arc<Catalog>,
    bounds: PriceRange,
    state: QueryState,
    history: SearchHistory,
    observers: Observers<QueryState>,
}

impl CatalogBrowser {
    /// Start with the default query for `catalog`.
    pub fn new(catalog: Arc<Catalog>, history: SearchHistory) -> Self {
        let bounds = catalog.price_bounds();
        Self {
            catalog,
            bounds,
            state: QueryState::with_bounds(bounds),
            history,
            observers: Observers::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Absolute price bounds of the catalog.
    pub fn bounds(&self) -> PriceRange {
        self.bounds
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Products matching the current query, in sort order.
    pub fn results(&self) -> Vec<&Product> {
        compute_filtered_catalog(&self.catalog, &self.state)
    }

    /// Replace the search term.
    pub fn set_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.update(|state| state.term = term);
    }

    /// The search box lost focus: remember the current term.
    pub fn commit_search(&mut self) {
        let term = self.state.term.clone();
        self.history.save(&term);
    }

    /// Search again for a remembered term.
    pub fn use_history_term(&mut self, term: &str) {
        self.set_term(term);
    }

    pub fn toggle_category(&mut self, choice: CategoryChoice) {
        self.update(|state| state.toggle_category(choice));
    }

    /// Apply a `category` deep-link parameter. See
    /// [`QueryState::apply_category_param`].
    pub fn apply_category_param(&mut self, raw: &str) -> bool {
        let mut applied = false;
        self.update(|state| applied = state.apply_category_param(raw));
        applied
    }

    /// Set the price range filter.
    pub fn set_price_range(&mut self, min: Money, max: Money) -> Result<(), CommerceError> {
        let range = PriceRange::new(min, max)?;
        self.update(|state| state.price_range = range);
        Ok(())
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.update(|state| state.sort = sort);
    }

    /// Reset term, categories, price range, and sort.
    pub fn clear_filters(&mut self) {
        let bounds = self.bounds;
        self.update(|state| state.clear_filters(bounds));
    }

    pub fn has_active_filters(&self) -> bool {
        self.state.has_active_filters(self.bounds)
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Register a listener called with the new query state after each change.
    pub fn subscribe(&mut self, listener: impl Fn(&QueryState) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn update(&mut self, apply: impl FnOnce(&mut QueryState)) {
        let before = self.state.clone();
        apply(&mut self.state);
        if self.state != before {
            tracing::debug!(
                term = %self.state.term,
                categories = self.state.categories.len(),
                sort = %self.state.sort,
                "query state changed"
            );
            self.observers.notify(&self.state);
        }
    }
}

impl std::fmt::Debug for CatalogBrowser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogBrowser")
            .field("products", &self.catalog.len())
            .field("bounds", &self.bounds)
            .field("state", &self.state)
            .field("history", &self.history)
            .finish()
    }
}
