//! Shop types for the marketplace.

use crate::ids::ShopId;
use serde::{Deserialize, Serialize};

/// A seller on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shop {
    /// Unique shop identifier.
    pub id: ShopId,
    /// Shop name.
    pub name: String,
    /// Shop banner image URL.
    pub image: String,
    /// Average customer rating (0.0 to 5.0).
    pub rating: f64,
    /// Number of followers.
    pub followers: i64,
    /// Main merchandise category, as displayed on the shop card.
    pub category: String,
    /// Physical location (e.g., "Makola Market, Accra").
    pub location: String,
    /// Whether the shop has passed marketplace verification.
    pub verified: bool,
}
