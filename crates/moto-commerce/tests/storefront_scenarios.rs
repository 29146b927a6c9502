//! End-to-end scenarios for the cart store and catalog query engine.

use std::sync::Arc;

use moto_cache::{Cache, KeyValueStore, MemoryStore};
use moto_commerce::cart::CART_STORAGE_KEY;
use moto_commerce::prelude::*;

fn scenario_catalog() -> Catalog {
    Catalog::new(vec![
        Product::new(1, "Brake Pad", Category::Brakes, Money::from_decimal(50.0), ""),
        Product::new(2, "Exhaust Pipe", Category::Exhaust, Money::from_decimal(200.0), "")
            .with_original_price(Money::from_decimal(250.0)),
    ])
    .unwrap()
}

fn ids(items: &[&Product]) -> Vec<u32> {
    items.iter().map(|p| p.id.get()).collect()
}

#[test]
fn exhaust_search_and_price_sort() {
    let catalog = scenario_catalog();
    let mut query = QueryState::for_catalog(&catalog);

    query.term = "exhaust".to_string();
    let results = compute_filtered_catalog(&catalog, &query);
    assert_eq!(ids(&results), vec![2]);
    assert_eq!(results[0].discount_percent(), 20);

    query.term.clear();
    query.sort = SortOption::PriceDesc;
    assert_eq!(ids(&compute_filtered_catalog(&catalog, &query)), vec![2, 1]);
}

#[test]
fn cart_totals_for_repeated_add() {
    let cache = Cache::new(Arc::new(MemoryStore::new()));
    let mut cart = CartStore::open(cache);
    let product = Product::new(7, "Chain Kit", Category::Engine, Money::from_decimal(99.99), "");

    cart.add_to_cart(&product);
    cart.add_to_cart(&product);

    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].quantity, 2);
    assert_eq!(cart.total_price(), Money::from_decimal(199.98));
    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.total_price().display(), "$199.98");
}

#[test]
fn cart_survives_reload() {
    let store = MemoryStore::new();
    let catalog = Catalog::motoparts();

    let before = {
        let mut cart = CartStore::open(Cache::new(Arc::new(store.clone())));
        for id in [4, 2, 4, 9] {
            cart.add_to_cart(catalog.get(ProductId::new(id)).unwrap());
        }
        cart.update_quantity(ProductId::new(9), 3);
        cart.lines().to_vec()
    };

    let reloaded = CartStore::open(Cache::new(Arc::new(store)));
    assert_eq!(reloaded.lines(), before.as_slice());
}

#[test]
fn last_tab_to_write_wins() {
    let origin = MemoryStore::new();
    let catalog = Catalog::motoparts();

    let mut tab_a = CartStore::open(Cache::new(Arc::new(origin.clone())));
    let mut tab_b = CartStore::open(Cache::new(Arc::new(origin.clone())));

    tab_a.add_to_cart(catalog.get(ProductId::new(1)).unwrap());
    tab_b.add_to_cart(catalog.get(ProductId::new(2)).unwrap());

    let reopened = CartStore::open(Cache::new(Arc::new(origin.clone())));
    let ids: Vec<u32> = reopened.lines().iter().map(|l| l.id.get()).collect();
    assert_eq!(ids, vec![2]);
    assert!(origin.exists(CART_STORAGE_KEY).unwrap());
}

#[test]
fn update_to_zero_matches_remove() {
    let catalog = Catalog::motoparts();
    let pad = catalog.get(ProductId::new(2)).unwrap();
    let rotor = catalog.get(ProductId::new(8)).unwrap();

    let mut by_update = CartStore::open(Cache::new(Arc::new(MemoryStore::new())));
    let mut by_remove = CartStore::open(Cache::new(Arc::new(MemoryStore::new())));
    for cart in [&mut by_update, &mut by_remove] {
        cart.add_to_cart(pad);
        cart.add_to_cart(rotor);
    }

    by_update.update_quantity(pad.id, 0);
    by_remove.remove_from_cart(pad.id);
    assert_eq!(by_update.lines(), by_remove.lines());
}

#[test]
fn search_history_scenario() {
    let cache = Cache::new(Arc::new(MemoryStore::new()));
    let mut history = SearchHistory::open(cache.clone());

    history.save("brake");
    history.save("Brake");
    assert_eq!(history.terms(), ["Brake"]);

    for term in ["a", "b", "c", "d", "e", "f"] {
        history.save(term);
    }
    assert_eq!(history.len(), 5);
    assert!(!history.terms().iter().any(|t| t == "Brake"));

    let restored = SearchHistory::open(cache);
    assert_eq!(restored.terms(), history.terms());
}

#[test]
fn browser_over_seed_catalog() {
    let cache = Cache::new(Arc::new(MemoryStore::new()));
    let catalog = Arc::new(Catalog::motoparts());
    let mut browser = CatalogBrowser::new(Arc::clone(&catalog), SearchHistory::open(cache));

    browser.toggle_category(CategoryChoice::All);
    assert_eq!(browser.results().len(), catalog.len());

    browser.toggle_category(Category::Exhaust.into());
    browser.toggle_category(Category::Suspension.into());
    browser.set_sort(SortOption::PriceAsc);

    let results = browser.results();
    assert_eq!(results.len(), 4);
    assert!(results.windows(2).all(|w| w[0].price <= w[1].price));
    assert!(browser.has_active_filters());
}
