//! Pure query functions over product lists.
//!
//! Each function takes the current candidate list and returns the
//! narrowed (or reordered) list. [`compute_filtered_catalog`] runs the
//! whole pipeline: search, category, price range, sort.

use std::cmp::Ordering;

use crate::catalog::{Catalog, Product};
use crate::search::{CategoryChoice, PriceRange, QueryState, SortOption};

/// Case-insensitive substring match on name, category, and brand.
///
/// A blank term keeps everything.
pub fn search<'a>(term: &str, items: Vec<&'a Product>) -> Vec<&'a Product> {
    if term.trim().is_empty() {
        return items;
    }
    let needle = term.to_lowercase();
    items
        .into_iter()
        .filter(|p| matches_term(p, &needle))
        .collect()
}

fn matches_term(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.category.as_str().to_lowercase().contains(needle)
        || product
            .brand
            .as_deref()
            .is_some_and(|b| b.to_lowercase().contains(needle))
}

/// Keep products whose category is selected.
///
/// An empty selection, or one containing "All", keeps everything.
pub fn filter_by_category<'a>(
    selected: &[CategoryChoice],
    items: Vec<&'a Product>,
) -> Vec<&'a Product> {
    if selected.is_empty() || selected.contains(&CategoryChoice::All) {
        return items;
    }
    items
        .into_iter()
        .filter(|p| selected.contains(&CategoryChoice::Category(p.category)))
        .collect()
}

/// Keep products priced within `range`, both ends inclusive.
pub fn filter_by_price_range<'a>(range: PriceRange, items: Vec<&'a Product>) -> Vec<&'a Product> {
    items.into_iter().filter(|p| range.contains(p.price)).collect()
}

/// Stable sort by `option`.
pub fn sort(option: SortOption, items: &mut [&Product]) {
    match option {
        SortOption::PriceAsc => items.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceDesc => items.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::NameAsc => items.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortOption::NameDesc => items.sort_by(|a, b| compare_names(&b.name, &a.name)),
        SortOption::RatingDesc => items.sort_by(|a, b| rating(b).total_cmp(&rating(a))),
        SortOption::Newest => items.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}

fn rating(product: &Product) -> f32 {
    product.rating.unwrap_or(0.0)
}

/// Case-insensitive name order with a case-sensitive tie break.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Run the full query against the catalog.
pub fn compute_filtered_catalog<'a>(catalog: &'a Catalog, query: &QueryState) -> Vec<&'a Product> {
    let items: Vec<&Product> = catalog.products().iter().collect();
    let items = search(&query.term, items);
    let items = filter_by_category(&query.categories, items);
    let mut items = filter_by_price_range(query.price_range, items);
    sort(query.sort, &mut items);
    items
}
