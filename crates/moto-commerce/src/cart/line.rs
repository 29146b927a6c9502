//! Cart line type.

use crate::catalog::{discount_percent, Category, Product};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Deserializer, Serialize};

/// One product in the cart with the quantity to purchase.
///
/// Product fields are copied when the line is created; later catalog
/// changes do not reach existing lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product id, also the line's identity.
    pub id: ProductId,
    /// Display asset reference.
    pub image: String,
    /// Product name.
    pub name: String,
    /// Product category.
    pub category: Category,
    /// Unit price at the time the line was created.
    pub price: Money,
    /// Pre-discount unit price at the time the line was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Quantity, always at least 1. Stored values above `u32::MAX` saturate.
    #[serde(deserialize_with = "saturating_quantity")]
    pub quantity: u32,
}

fn saturating_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = u64::deserialize(deserializer)?;
    Ok(u32::try_from(raw).unwrap_or(u32::MAX))
}

impl CartLine {
    /// Snapshot a product into a new line with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            image: product.image.clone(),
            name: product.name.clone(),
            category: product.category,
            price: product.price,
            original_price: product.original_price,
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.price * i64::from(self.quantity)
    }

    /// Discount percentage of the snapshotted prices.
    pub fn discount_percent(&self) -> i64 {
        discount_percent(self.price, self.original_price)
    }
}
