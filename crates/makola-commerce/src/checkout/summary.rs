//! Order summary calculation.

use crate::cart::{CartItem, CartState};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Flat delivery fee charged on every order.
pub const DELIVERY_FEE: Money = Money::new(10_00, Currency::GHS);

/// Itemized totals for an order about to be placed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Delivery fee.
    pub delivery_fee: Money,
    /// Amount to charge (subtotal plus delivery fee).
    pub total: Money,
}

impl OrderSummary {
    /// Build a summary for a list of cart items.
    ///
    /// Fails with [`CommerceError::EmptyCart`] when there is nothing to
    /// order.
    pub fn for_items(items: &[CartItem]) -> Result<Self, CommerceError> {
        if items.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let currency = items[0].price.currency;
        let subtotal = items.iter().fold(Money::zero(currency), |acc, item| {
            acc.saturating_add(&item.line_total())
        });
        let total = subtotal.saturating_add(&DELIVERY_FEE);

        Ok(Self {
            subtotal,
            delivery_fee: DELIVERY_FEE,
            total,
        })
    }

    /// Build a summary for the current contents of a cart.
    pub fn for_cart(cart: &CartState) -> Result<Self, CommerceError> {
        Self::for_items(cart.items())
    }
}
