//! Product catalog module.
//!
//! Contains types for products, shops, and categories, plus the static
//! fixture data the storefront browses.

mod category;
mod product;
mod shop;

pub mod fixtures;

pub use category::{Category, Subcategory};
pub use product::Product;
pub use shop::Shop;

use crate::ids::{CategoryId, ProductId, ShopId};

/// Read-only lookup facade over the catalog data.
pub struct Catalog {
    products: Vec<Product>,
    shops: Vec<Shop>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from explicit data.
    pub fn new(products: Vec<Product>, shops: Vec<Shop>, categories: Vec<Category>) -> Self {
        Self {
            products,
            shops,
            categories,
        }
    }

    /// Build a catalog over the bundled fixture data.
    pub fn with_fixtures() -> Self {
        Self::new(
            fixtures::products(),
            fixtures::shops(),
            fixtures::categories(),
        )
    }

    /// All products.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All shops.
    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    /// All categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by ID.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a shop by ID.
    pub fn shop(&self, id: &ShopId) -> Option<&Shop> {
        self.shops.iter().find(|s| &s.id == id)
    }

    /// Look up a category by ID.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Products listed by a shop, in catalog order.
    pub fn products_in_shop(&self, shop_id: &ShopId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| &p.shop_id == shop_id)
            .collect()
    }

    /// Products in a category, in catalog order.
    pub fn products_in_category(&self, category_id: &CategoryId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| &p.category == category_id)
            .collect()
    }

    /// Case-insensitive substring search over product names.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Products currently on sale.
    pub fn on_sale(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_on_sale()).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_fixtures()
    }
}
