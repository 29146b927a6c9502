//! Product catalog module.
//!
//! The catalog is loaded once at startup and never mutated afterwards.

mod category;
mod product;
mod seed;

pub use category::Category;
pub use product::{discount_percent, Product};

use std::collections::HashSet;

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::search::PriceRange;

/// An immutable list of products with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting zero or duplicate ids and negative prices.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id.get() == 0 {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product \"{}\" has id 0",
                    product.name
                )));
            }
            if !seen.insert(product.id) {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if product.price.is_negative() {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product {} has negative price {}",
                    product.id, product.price
                )));
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog from a JSON array of product records.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Lowest and highest price across the catalog.
    ///
    /// An empty catalog yields `[0, 0]`.
    pub fn price_bounds(&self) -> PriceRange {
        let min = self.products.iter().map(|p| p.price).min();
        let max = self.products.iter().map(|p| p.price).max();
        match (min, max) {
            (Some(min), Some(max)) => PriceRange { min, max },
            _ => PriceRange {
                min: Money::zero(),
                max: Money::zero(),
            },
        }
    }

    /// The first `limit` featured products, in catalog order.
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).take(limit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, cents: i64) -> Product {
        Product::new(id, format!("Part {id}"), Category::Engine, Money::new(cents), "")
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![product(1, 100), product(1, 200)]);
        assert!(matches!(result, Err(CommerceError::InvalidCatalog(_))));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Catalog::new(vec![product(1, -1)]);
        assert!(matches!(result, Err(CommerceError::InvalidCatalog(_))));
    }

    #[test]
    fn test_price_bounds() {
        let catalog = Catalog::new(vec![product(1, 5000), product(2, 20000), product(3, 999)]).unwrap();
        let bounds = catalog.price_bounds();
        assert_eq!(bounds.min, Money::new(999));
        assert_eq!(bounds.max, Money::new(20000));
    }

    #[test]
    fn test_empty_catalog_bounds() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.price_bounds().min, Money::zero());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 1, "name": "Brake Pad", "category": "Brakes", "price": 5000, "image": "pad.jpg"},
            {"id": 2, "name": "Exhaust Pipe", "category": "Exhaust", "price": 20000,
             "originalPrice": 25000, "image": "pipe.jpg", "featured": true}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.featured(4).len(), 1);
        assert_eq!(
            catalog.get(ProductId::new(2)).unwrap().original_price,
            Some(Money::new(25000))
        );
    }

    #[test]
    fn test_zero_id_rejected() {
        let result = Catalog::new(vec![product(0, 100)]);
        assert!(matches!(result, Err(CommerceError::InvalidCatalog(_))));

        let json = r#"[{"id": 0, "name": "Bolt", "category": "Engine", "price": 100, "image": ""}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CommerceError::InvalidCatalog(_))
        ));
    }
}
