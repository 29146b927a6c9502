//! Product records.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category the product is listed under.
    pub category: Category,
    /// Manufacturer, matched by search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Current selling price.
    pub price: Money,
    /// Pre-discount price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Display asset reference.
    pub image: String,
    /// Average review score, used only for sorting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Shown in the featured collection.
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Create a product with no brand, discount, or rating.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: Category,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category,
            brand: None,
            price,
            original_price: None,
            image: image.into(),
            rating: None,
            featured: false,
        }
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the pre-discount price.
    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Mark as featured.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Discount percentage, `round(100 * (1 - price / original_price))`.
    ///
    /// Zero without an original price. Not clamped: an original price
    /// below the selling price gives a negative percentage.
    pub fn discount_percent(&self) -> i64 {
        discount_percent(self.price, self.original_price)
    }

    /// Check if the original price is above the selling price.
    pub fn has_discount(&self) -> bool {
        self.original_price.is_some_and(|o| o > self.price)
    }
}

/// Discount percentage for a price pair. See [`Product::discount_percent`].
pub fn discount_percent(price: Money, original_price: Option<Money>) -> i64 {
    original_price
        .and_then(|original| price.ratio(&original))
        .map(|ratio| ((1.0 - ratio) * 100.0).round() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exhaust_pipe() -> Product {
        Product::new(
            2,
            "Exhaust Pipe",
            Category::Exhaust,
            Money::from_decimal(200.0),
            "/img/exhaust.jpg",
        )
        .with_original_price(Money::from_decimal(250.0))
    }

    #[test]
    fn test_discount_percent() {
        let product = exhaust_pipe();
        assert_eq!(product.discount_percent(), 20);
        assert!(product.has_discount());
    }

    #[test]
    fn test_no_original_price_no_discount() {
        let product = Product::new(1, "Brake Pad", Category::Brakes, Money::new(5000), "");
        assert_eq!(product.discount_percent(), 0);
        assert!(!product.has_discount());
    }

    #[test]
    fn test_inverted_prices_give_negative_discount() {
        let product = Product::new(3, "Odd", Category::Engine, Money::new(12000), "")
            .with_original_price(Money::new(10000));
        assert_eq!(product.discount_percent(), -20);
        assert!(!product.has_discount());
    }

    #[test]
    fn test_zero_original_price() {
        assert_eq!(discount_percent(Money::new(100), Some(Money::zero())), 0);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"id":1,"name":"Brake Pad","category":"Brakes","price":5000,"image":"pad.jpg"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.brand, None);
        assert!(!product.featured);
    }
}
