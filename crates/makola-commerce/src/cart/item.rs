//! Cart line item types.

use crate::catalog::Product;
use crate::ids::{ProductId, ShopId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// Lines are keyed by product ID: one line per distinct product, with a
/// quantity of at least 1. Name, price, image, and shop fields are copied
/// from the product when it first enters the cart and are not refreshed on
/// later adds, so they reflect the catalog as of add time.
///
/// Persisted as self-describing JSON; unknown fields in a stored snapshot
/// are ignored on read, so older carts survive schema additions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product this line refers to; acts as the line's identity key.
    pub id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub price: Money,
    /// Pre-discount reference price at add time, if the product was on sale.
    pub original_price: Option<Money>,
    /// Product image URL.
    pub image: String,
    /// Shop selling the product.
    pub shop_id: ShopId,
    /// Shop name at add time.
    pub shop_name: String,
    /// Units of this product in the cart, always >= 1.
    pub quantity: i64,
}

impl CartItem {
    /// Total price for this line (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.price.saturating_mul(self.quantity)
    }
}

/// Product fields captured when an item enters the cart.
///
/// Everything a [`CartItem`] carries except the quantity, which the cart
/// manages itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSnapshot {
    /// Product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Current unit price.
    pub price: Money,
    /// Pre-discount reference price, if on sale.
    pub original_price: Option<Money>,
    /// Product image URL.
    pub image: String,
    /// Shop selling the product.
    pub shop_id: ShopId,
    /// Shop name.
    pub shop_name: String,
}

impl ProductSnapshot {
    /// Turn the snapshot into a cart line with the given quantity.
    pub(crate) fn into_item(self, quantity: i64) -> CartItem {
        CartItem {
            id: self.id,
            name: self.name,
            price: self.price,
            original_price: self.original_price,
            image: self.image,
            shop_id: self.shop_id,
            shop_name: self.shop_name,
            quantity,
        }
    }
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            original_price: product.original_price,
            image: product.image.clone(),
            shop_id: product.shop_id.clone(),
            shop_name: product.shop_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_line_total() {
        let item = CartItem {
            id: ProductId::new("p1"),
            name: "Gari".to_string(),
            price: Money::new(4500, Currency::GHS),
            original_price: None,
            image: String::new(),
            shop_id: ShopId::new("s1"),
            shop_name: "Kaneshie Fresh Foods".to_string(),
            quantity: 3,
        };
        assert_eq!(item.line_total(), Money::new(13500, Currency::GHS));
    }

    #[test]
    fn test_snapshot_from_product_copies_display_fields() {
        let product = crate::catalog::fixtures::products().remove(0);
        let snapshot = ProductSnapshot::from(&product);

        assert_eq!(snapshot.id, product.id);
        assert_eq!(snapshot.name, product.name);
        assert_eq!(snapshot.price, product.price);
        assert_eq!(snapshot.shop_name, product.shop_name);
    }

    #[test]
    fn test_item_json_ignores_unknown_fields() {
        let json = r#"{
            "id": "p1",
            "name": "Shito",
            "price": {"amount_minor": 2800, "currency": "GHS"},
            "original_price": null,
            "image": "https://example.com/shito.jpg",
            "shop_id": "s1",
            "shop_name": "Kaneshie Fresh Foods",
            "quantity": 2,
            "added_at": "2024-11-02T10:00:00Z"
        }"#;

        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id.as_str(), "p1");
        assert_eq!(item.quantity, 2);
    }
}
