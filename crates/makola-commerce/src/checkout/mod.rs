//! Checkout module.
//!
//! Totals an order, mints a payment reference, and clears the cart once
//! payment has been confirmed. The payment hand-off itself happens outside
//! this crate; callers run it between [`OrderSummary`] and [`place_order`].

mod summary;

pub use summary::{OrderSummary, DELIVERY_FEE};

use crate::cart::CartStore;
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A successfully placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacedOrder {
    /// Payment reference for the order.
    pub reference: OrderId,
    /// Amount charged, including delivery.
    pub total: Money,
}

/// Record a confirmed payment: mint the order and empty the cart.
///
/// Call this only after the payment collaborator reports success. Fails
/// with [`CommerceError::EmptyCart`] if the cart is empty, leaving it
/// untouched.
pub fn place_order(cart: &mut CartStore) -> Result<PlacedOrder, CommerceError> {
    let summary = OrderSummary::for_items(cart.items())?;
    let order = PlacedOrder {
        reference: OrderId::new(generate_reference()),
        total: summary.total,
    };
    cart.clear();
    Ok(order)
}

/// Generate a payment reference from the current wall clock.
fn generate_reference() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("ORD-{}", millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::ProductSnapshot;
    use crate::ids::{ProductId, ShopId};
    use crate::money::Currency;
    use makola_storage::MemoryStore;

    fn snapshot(id: &str, price_minor: i64) -> ProductSnapshot {
        ProductSnapshot {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            price: Money::new(price_minor, Currency::GHS),
            original_price: None,
            image: String::new(),
            shop_id: ShopId::new("shop-1"),
            shop_name: "Test Shop".to_string(),
        }
    }

    #[tokio::test]
    async fn test_place_order_charges_total_and_clears_cart() {
        let mut cart = CartStore::open(MemoryStore::new()).await;
        cart.add_item(snapshot("p1", 8500));
        cart.add_item(snapshot("p1", 8500));

        let order = place_order(&mut cart).unwrap();
        assert_eq!(order.total, Money::new(18000, Currency::GHS));
        assert!(order.reference.as_str().starts_with("ORD-"));
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_place_order_on_empty_cart_fails() {
        let mut cart = CartStore::open(MemoryStore::new()).await;
        assert!(matches!(
            place_order(&mut cart),
            Err(CommerceError::EmptyCart)
        ));
    }
}
