//! In-memory cart state with derived aggregates.

use crate::cart::{CartItem, ProductSnapshot};
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Cart contents plus derived totals.
///
/// `total` and `item_count` are pure functions of `items`: every transition
/// recomputes both from the resulting item list, so they can never drift.
/// Fields are private for that reason; mutate through the methods and read
/// through the accessors.
///
/// Transitions are infallible. Operations on an ID that isn't in the cart
/// are no-ops, and arithmetic saturates instead of overflowing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    items: Vec<CartItem>,
    total: Money,
    item_count: i64,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cart contents wholesale, e.g. with a restored snapshot.
    pub fn load(items: Vec<CartItem>) -> Self {
        let mut state = Self {
            items,
            total: Money::zero(Currency::default()),
            item_count: 0,
        };
        state.recompute();
        state
    }

    /// Add one unit of a product.
    ///
    /// If a line with the same ID exists, its quantity goes up by 1 and its
    /// other fields are left untouched, even when the snapshot carries newer
    /// values. Otherwise a new line with quantity 1 is appended at the end.
    pub fn add_item(&mut self, snapshot: ProductSnapshot) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == snapshot.id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(snapshot.into_item(1));
        }
        self.recompute();
    }

    /// Remove the line with the given ID.
    ///
    /// Returns whether a line was removed; an absent ID is a no-op.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        let removed = self.items.len() < len_before;
        self.recompute();
        removed
    }

    /// Set a line's quantity to an absolute value.
    ///
    /// A quantity of 0 or below removes the line, exactly like
    /// [`remove_item`](Self::remove_item). An absent ID is a no-op; this
    /// never creates a line. Returns whether the cart changed.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(id);
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.id == id) {
            item.quantity = quantity;
            self.recompute();
            true
        } else {
            false
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    /// Items in the cart, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of `price * quantity` over all items.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Sum of quantities over all items.
    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    /// Check if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn recompute(&mut self) {
        let currency = self
            .items
            .first()
            .map(|i| i.price.currency)
            .unwrap_or_default();

        self.total = self
            .items
            .iter()
            .fold(Money::zero(currency), |acc, item| {
                acc.saturating_add(&item.line_total())
            });
        self.item_count = self.items.iter().map(|i| i.quantity).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ShopId;

    fn snapshot(id: &str, price_minor: i64) -> ProductSnapshot {
        ProductSnapshot {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            price: Money::new(price_minor, Currency::GHS),
            original_price: None,
            image: format!("https://example.com/{}.jpg", id),
            shop_id: ShopId::new("shop-1"),
            shop_name: "Test Shop".to_string(),
        }
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = CartState::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero(Currency::GHS));
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_new_item_appends_with_quantity_one() {
        let mut cart = CartState::new();
        cart.add_item(snapshot("p1", 1000));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].id.as_str(), "p1");
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.total(), Money::new(1000, Currency::GHS));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_add_same_item_increments_quantity() {
        let mut cart = CartState::new();
        cart.add_item(snapshot("p1", 1000));
        cart.add_item(snapshot("p1", 1000));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total(), Money::new(2000, Currency::GHS));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_repeat_add_does_not_refresh_denormalized_fields() {
        let mut cart = CartState::new();
        cart.add_item(snapshot("p1", 1000));

        // Same product, newer catalog data.
        let mut newer = snapshot("p1", 1500);
        newer.name = "Renamed Product".to_string();
        cart.add_item(newer);

        let line = &cart.items()[0];
        assert_eq!(line.quantity, 2);
        assert_eq!(line.price, Money::new(1000, Currency::GHS));
        assert_eq!(line.name, "Product p1");
        // Totals use the price captured at first add.
        assert_eq!(cart.total(), Money::new(2000, Currency::GHS));
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = CartState::new();
        cart.add_item(snapshot("p1", 1000));
        cart.add_item(snapshot("p2", 500));
        cart.add_item(snapshot("p1", 1000));
        cart.add_item(snapshot("p3", 250));

        let ids: Vec<_> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartState::new();
        cart.add_item(snapshot("p1", 1000));
        cart.add_item(snapshot("p2", 500));

        assert!(cart.remove_item(&ProductId::new("p1")));
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].id.as_str(), "p2");
        assert_eq!(cart.total(), Money::new(500, Currency::GHS));
    }

    #[test]
    fn test_remove_absent_item_is_a_noop() {
        let mut cart = CartState::new();
        cart.add_item(snapshot("p1", 1000));
        let before = cart.clone();

        assert!(!cart.remove_item(&ProductId::new("p9")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_sets_absolute_value() {
        let mut cart = CartState::new();
        cart.add_item(snapshot("p1", 1000));
        cart.add_item(snapshot("p1", 1000));

        assert!(cart.update_quantity(&ProductId::new("p1"), 5));
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.total(), Money::new(5000, Currency::GHS));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_zero_or_below_removes() {
        for quantity in [0, -1] {
            let mut cart = CartState::new();
            cart.add_item(snapshot("p1", 1000));

            assert!(cart.update_quantity(&ProductId::new("p1"), quantity));
            assert!(cart.is_empty());
            assert_eq!(cart.total(), Money::zero(Currency::GHS));
            assert_eq!(cart.item_count(), 0);
        }
    }

    #[test]
    fn test_update_quantity_absent_id_creates_nothing() {
        let mut cart = CartState::new();
        assert!(!cart.update_quantity(&ProductId::new("p1"), 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = CartState::new();
        cart.add_item(snapshot("p1", 1000));
        cart.add_item(snapshot("p2", 500));

        cart.clear();
        assert!(cart.items().is_empty());
        assert_eq!(cart.total(), Money::zero(Currency::GHS));
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_load_recomputes_aggregates() {
        let items = vec![
            snapshot("p1", 1000).into_item(2),
            snapshot("p2", 500).into_item(3),
        ];

        let cart = CartState::load(items);
        assert_eq!(cart.total(), Money::new(3500, Currency::GHS));
        assert_eq!(cart.item_count(), 5);
    }

    // The walkthrough from the storefront's cart screen: add, re-add, add a
    // second product, bump a quantity, drop a line, clear.
    #[test]
    fn test_full_shopping_sequence() {
        let mut cart = CartState::new();

        cart.add_item(snapshot("p1", 1000));
        assert_eq!(cart.total(), Money::new(1000, Currency::GHS));
        assert_eq!(cart.item_count(), 1);

        cart.add_item(snapshot("p1", 1000));
        assert_eq!(cart.total(), Money::new(2000, Currency::GHS));
        assert_eq!(cart.item_count(), 2);

        cart.add_item(snapshot("p2", 500));
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.total(), Money::new(2500, Currency::GHS));
        assert_eq!(cart.item_count(), 3);

        cart.update_quantity(&ProductId::new("p1"), 5);
        assert_eq!(cart.total(), Money::new(5500, Currency::GHS));
        assert_eq!(cart.item_count(), 6);

        cart.update_quantity(&ProductId::new("p2"), 0);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total(), Money::new(5000, Currency::GHS));
        assert_eq!(cart.item_count(), 5);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero(Currency::GHS));
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_aggregates_always_match_items() {
        let mut cart = CartState::new();
        cart.add_item(snapshot("p1", 1099));
        cart.add_item(snapshot("p2", 250));
        cart.add_item(snapshot("p1", 1099));
        cart.update_quantity(&ProductId::new("p2"), 7);
        cart.remove_item(&ProductId::new("p1"));

        let expected_total: i64 = cart
            .items()
            .iter()
            .map(|i| i.price.amount_minor * i.quantity)
            .sum();
        let expected_count: i64 = cart.items().iter().map(|i| i.quantity).sum();

        assert_eq!(cart.total().amount_minor, expected_total);
        assert_eq!(cart.item_count(), expected_count);
        assert!(cart.items().iter().all(|i| i.quantity >= 1));
    }
}
