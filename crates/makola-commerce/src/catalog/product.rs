//! Product types for the marketplace catalog.

use crate::ids::{CategoryId, ProductId, ShopId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product listed by a marketplace shop.
///
/// Shop name and category are denormalized onto the product so listing
/// screens can render a card without extra lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Current unit price.
    pub price: Money,
    /// Pre-discount reference price, if the product is on sale.
    pub original_price: Option<Money>,
    /// Main product image URL.
    pub image: String,
    /// Average customer rating (0.0 to 5.0).
    pub rating: f64,
    /// Number of customer reviews.
    pub reviews: i64,
    /// Shop selling this product.
    pub shop_id: ShopId,
    /// Shop name (denormalized for display).
    pub shop_name: String,
    /// Category this product belongs to.
    pub category: CategoryId,
}

impl Product {
    /// Check if this product is on sale (has a higher reference price).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original.amount_minor > self.price.amount_minor)
            .unwrap_or(false)
    }

    /// Amount saved relative to the reference price, if on sale.
    pub fn savings(&self) -> Option<Money> {
        if !self.is_on_sale() {
            return None;
        }
        self.original_price
            .map(|original| original.saturating_sub(&self.price))
    }

    /// Discount percentage relative to the reference price, if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|original| {
            if original.amount_minor <= self.price.amount_minor || original.amount_minor == 0 {
                return None;
            }
            let saved = (original.amount_minor - self.price.amount_minor) as f64;
            Some(saved / original.amount_minor as f64 * 100.0)
        })
    }
}
