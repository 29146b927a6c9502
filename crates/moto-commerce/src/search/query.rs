//! Query state: search term, category selection, price range, and sort.

use std::fmt;
use std::str::FromStr;

use crate::catalog::{Catalog, Category};
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
    /// Sort by highest rated; unrated counts as 0.
    RatingDesc,
    /// Sort by id, highest first.
    #[default]
    Newest,
}

impl SortOption {
    /// Every option in menu order.
    pub const ALL: [SortOption; 6] = [
        SortOption::Newest,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::RatingDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::RatingDesc => "rating-desc",
            SortOption::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
            SortOption::RatingDesc => "Highest Rated",
            SortOption::Newest => "Newest",
        }
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| CommerceError::UnknownSortOption(s.to_string()))
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry in the category selection: a real category or the "All" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryChoice {
    All,
    Category(Category),
}

impl CategoryChoice {
    /// Name of the sentinel entry.
    pub const ALL_NAME: &'static str = "All";

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryChoice::All => Self::ALL_NAME,
            CategoryChoice::Category(c) => c.as_str(),
        }
    }
}

impl From<Category> for CategoryChoice {
    fn from(category: Category) -> Self {
        CategoryChoice::Category(category)
    }
}

impl FromStr for CategoryChoice {
    type Err = CommerceError;

    /// Parse "All" or an exact category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_NAME {
            return Ok(CategoryChoice::All);
        }
        s.parse().map(CategoryChoice::Category)
    }
}

impl fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// Create a range, rejecting `min > max`.
    pub fn new(min: Money, max: Money) -> Result<Self, CommerceError> {
        if min > max {
            return Err(CommerceError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Check `min <= price <= max`.
    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }
}

/// The query currently applied to the catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Free-text search term.
    pub term: String,
    /// Selected categories. Empty means no category filter.
    pub categories: Vec<CategoryChoice>,
    /// Price range filter.
    pub price_range: PriceRange,
    /// Sort order.
    pub sort: SortOption,
}

impl QueryState {
    /// The default query for a catalog: everything, newest first.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::with_bounds(catalog.price_bounds())
    }

    /// The default query with the given price bounds.
    pub fn with_bounds(bounds: PriceRange) -> Self {
        Self {
            term: String::new(),
            categories: Vec::new(),
            price_range: bounds,
            sort: SortOption::default(),
        }
    }

    /// Toggle a category checkbox.
    ///
    /// Toggling "All" selects only "All", or clears the selection if it was
    /// already exactly "All". Toggling a category while "All" is selected
    /// replaces the selection with that category.
    pub fn toggle_category(&mut self, choice: CategoryChoice) {
        match choice {
            CategoryChoice::All => {
                if self.categories == [CategoryChoice::All] {
                    self.categories.clear();
                } else {
                    self.categories = vec![CategoryChoice::All];
                }
            }
            CategoryChoice::Category(_) => {
                if self.categories.contains(&CategoryChoice::All) {
                    self.categories = vec![choice];
                } else if let Some(pos) = self.categories.iter().position(|c| *c == choice) {
                    self.categories.remove(pos);
                } else {
                    self.categories.push(choice);
                }
            }
        }
    }

    /// Apply a `category` deep-link parameter.
    ///
    /// The value is percent-decoded. If it names a real category the
    /// selection becomes just that category and true is returned; anything
    /// else, including "All", leaves the selection alone.
    pub fn apply_category_param(&mut self, raw: &str) -> bool {
        let decoded = percent_decode(raw);
        match decoded.parse::<Category>() {
            Ok(category) => {
                self.categories = vec![CategoryChoice::Category(category)];
                true
            }
            Err(_) => false,
        }
    }

    /// True when anything differs from the default query for `bounds`.
    ///
    /// Any selection counts, including just "All".
    pub fn has_active_filters(&self, bounds: PriceRange) -> bool {
        !self.term.trim().is_empty()
            || !self.categories.is_empty()
            || self.price_range != bounds
            || self.sort != SortOption::default()
    }

    /// Reset to the default query for `bounds`.
    pub fn clear_filters(&mut self, bounds: PriceRange) {
        *self = Self::with_bounds(bounds);
    }
}

/// Decode `%XX` escapes and `+` as space. Bad escapes pass through.
fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
                match hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                    Some(b) => {
                        out.push(b);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> PriceRange {
        PriceRange::new(Money::new(5000), Money::new(20000)).unwrap()
    }

    #[test]
    fn test_sort_option_strings() {
        for option in SortOption::ALL {
            assert_eq!(option.as_str().parse::<SortOption>().unwrap(), option);
        }
        assert_eq!(SortOption::default(), SortOption::Newest);
        assert!("relevance".parse::<SortOption>().is_err());
        assert_eq!(
            serde_json::to_string(&SortOption::RatingDesc).unwrap(),
            "\"rating-desc\""
        );
    }

    #[test]
    fn test_category_choice_parse() {
        assert_eq!("All".parse::<CategoryChoice>().unwrap(), CategoryChoice::All);
        assert_eq!(
            "Wheels".parse::<CategoryChoice>().unwrap(),
            CategoryChoice::Category(Category::Wheels)
        );
        assert!("Tyres".parse::<CategoryChoice>().is_err());
    }

    #[test]
    fn test_price_range_inclusive() {
        let range = bounds();
        assert!(range.contains(Money::new(5000)));
        assert!(range.contains(Money::new(20000)));
        assert!(!range.contains(Money::new(4999)));
        assert!(!range.contains(Money::new(20001)));
    }

    #[test]
    fn test_price_range_rejects_inverted() {
        assert!(matches!(
            PriceRange::new(Money::new(2), Money::new(1)),
            Err(CommerceError::InvalidPriceRange { .. })
        ));
    }

    #[test]
    fn test_toggle_all() {
        let mut q = QueryState::with_bounds(bounds());
        q.toggle_category(CategoryChoice::All);
        assert_eq!(q.categories, vec![CategoryChoice::All]);
        q.toggle_category(CategoryChoice::All);
        assert!(q.categories.is_empty());
    }

    #[test]
    fn test_toggle_category_replaces_all() {
        let mut q = QueryState::with_bounds(bounds());
        q.toggle_category(CategoryChoice::All);
        q.toggle_category(Category::Brakes.into());
        assert_eq!(q.categories, vec![CategoryChoice::Category(Category::Brakes)]);
    }

    #[test]
    fn test_toggle_category_adds_and_removes() {
        let mut q = QueryState::with_bounds(bounds());
        q.toggle_category(Category::Brakes.into());
        q.toggle_category(Category::Exhaust.into());
        assert_eq!(q.categories.len(), 2);

        q.toggle_category(Category::Brakes.into());
        assert_eq!(q.categories, vec![CategoryChoice::Category(Category::Exhaust)]);

        q.toggle_category(CategoryChoice::All);
        assert_eq!(q.categories, vec![CategoryChoice::All]);
    }

    #[test]
    fn test_apply_category_param() {
        let mut q = QueryState::with_bounds(bounds());
        assert!(q.apply_category_param("Exhaust"));
        assert_eq!(q.categories, vec![CategoryChoice::Category(Category::Exhaust)]);

        assert!(!q.apply_category_param("All"));
        assert!(!q.apply_category_param("Nope"));
        assert_eq!(q.categories, vec![CategoryChoice::Category(Category::Exhaust)]);
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("Brakes%20%26%20Rotors"), "Brakes & Rotors");
        assert_eq!(percent_decode("a+b"), "a b");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%4"), "%4");
    }

    #[test]
    fn test_has_active_filters() {
        let mut q = QueryState::with_bounds(bounds());
        assert!(!q.has_active_filters(bounds()));

        q.term = "   ".to_string();
        assert!(!q.has_active_filters(bounds()));

        q.term = "pad".to_string();
        assert!(q.has_active_filters(bounds()));

        q.clear_filters(bounds());
        q.toggle_category(CategoryChoice::All);
        assert!(q.has_active_filters(bounds()));

        q.clear_filters(bounds());
        q.price_range.max = Money::new(10000);
        assert!(q.has_active_filters(bounds()));

        q.clear_filters(bounds());
        q.sort = SortOption::PriceAsc;
        assert!(q.has_active_filters(bounds()));

        q.clear_filters(bounds());
        assert_eq!(q, QueryState::with_bounds(bounds()));
    }
}
