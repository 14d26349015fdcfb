//! Category types for browsing the catalog.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A top-level browse category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Category tile image URL.
    pub image: String,
    /// Subcategories shown on the category screen.
    pub subcategories: Vec<Subcategory>,
    /// Tags commonly searched within this category.
    pub popular_tags: Vec<String>,
}

/// A subcategory within a top-level category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subcategory {
    /// Unique subcategory identifier.
    pub id: CategoryId,
    /// Subcategory name.
    pub name: String,
    /// Subcategory tile image URL.
    pub image: String,
}
