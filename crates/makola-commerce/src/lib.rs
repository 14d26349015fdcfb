//! Marketplace domain types and cart logic for the Makola storefront.
//!
//! This crate provides the non-UI core of the storefront:
//!
//! - **Catalog**: products, shops, categories, and the bundled fixtures
//! - **Cart**: the persisted cart state machine with derived totals
//! - **Checkout**: order summaries, delivery fee, order placement
//!
//! # Example
//!
//! ```rust,ignore
//! use makola_commerce::prelude::*;
//! use makola_storage::FileStore;
//!
//! let catalog = Catalog::with_fixtures();
//! let backend = FileStore::open("~/.makola").await?;
//! let mut cart = CartStore::open(backend).await;
//!
//! // Add a product; the write to storage happens in the background.
//! let product = catalog.product(&ProductId::new("prod-kente-scarf")).unwrap();
//! cart.add_item(ProductSnapshot::from(product));
//! println!("Cart total: {}", cart.total());
//!
//! // After the payment provider confirms:
//! let order = checkout::place_order(&mut cart)?;
//! println!("Order placed: {}", order.reference);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product, Shop, Subcategory};

    // Cart
    pub use crate::cart::{CartItem, CartState, CartStore, ProductSnapshot, CART_KEY};

    // Checkout
    pub use crate::checkout::{self, OrderSummary, PlacedOrder, DELIVERY_FEE};
}
