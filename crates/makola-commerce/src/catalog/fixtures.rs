//! Static catalog fixtures.
//!
//! Stands in for a live product service: a small set of shops, categories,
//! and products with stable IDs, so the storefront can run end to end
//! without a network.

use crate::catalog::{Category, Product, Shop, Subcategory};
use crate::ids::{CategoryId, ProductId, ShopId};
use crate::money::{Currency, Money};

fn ghs(amount: f64) -> Money {
    Money::from_decimal(amount, Currency::GHS)
}

/// Fixture shops.
pub fn shops() -> Vec<Shop> {
    vec![
        Shop {
            id: ShopId::new("shop-ama-fabrics"),
            name: "Ama's Fabrics".to_string(),
            image: "https://images.pexels.com/photos/6044266/pexels-photo-6044266.jpeg"
                .to_string(),
            rating: 4.8,
            followers: 2340,
            category: "Fashion".to_string(),
            location: "Makola Market, Accra".to_string(),
            verified: true,
        },
        Shop {
            id: ShopId::new("shop-osu-electronics"),
            name: "Osu Electronics Hub".to_string(),
            image: "https://images.pexels.com/photos/1029757/pexels-photo-1029757.jpeg"
                .to_string(),
            rating: 4.5,
            followers: 1876,
            category: "Electronics".to_string(),
            location: "Oxford Street, Osu".to_string(),
            verified: true,
        },
        Shop {
            id: ShopId::new("shop-kaneshie-fresh"),
            name: "Kaneshie Fresh Foods".to_string(),
            image: "https://images.pexels.com/photos/2252584/pexels-photo-2252584.jpeg"
                .to_string(),
            rating: 4.6,
            followers: 980,
            category: "Groceries".to_string(),
            location: "Kaneshie Market, Accra".to_string(),
            verified: false,
        },
        Shop {
            id: ShopId::new("shop-adum-home"),
            name: "Adum Home & Living".to_string(),
            image: "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg"
                .to_string(),
            rating: 4.3,
            followers: 654,
            category: "Home".to_string(),
            location: "Adum, Kumasi".to_string(),
            verified: true,
        },
    ]
}

/// Fixture categories.
pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: CategoryId::new("fashion"),
            name: "Fashion".to_string(),
            image: "https://images.pexels.com/photos/994523/pexels-photo-994523.jpeg".to_string(),
            subcategories: vec![
                Subcategory {
                    id: CategoryId::new("fashion-fabrics"),
                    name: "Fabrics".to_string(),
                    image: "https://images.pexels.com/photos/6044227/pexels-photo-6044227.jpeg"
                        .to_string(),
                },
                Subcategory {
                    id: CategoryId::new("fashion-footwear"),
                    name: "Footwear".to_string(),
                    image: "https://images.pexels.com/photos/267320/pexels-photo-267320.jpeg"
                        .to_string(),
                },
            ],
            popular_tags: vec![
                "kente".to_string(),
                "ankara".to_string(),
                "slippers".to_string(),
            ],
        },
        Category {
            id: CategoryId::new("electronics"),
            name: "Electronics".to_string(),
            image: "https://images.pexels.com/photos/356056/pexels-photo-356056.jpeg".to_string(),
            subcategories: vec![
                Subcategory {
                    id: CategoryId::new("electronics-phones"),
                    name: "Phones".to_string(),
                    image: "https://images.pexels.com/photos/47261/pexels-photo-47261.jpeg"
                        .to_string(),
                },
                Subcategory {
                    id: CategoryId::new("electronics-audio"),
                    name: "Audio".to_string(),
                    image: "https://images.pexels.com/photos/205926/pexels-photo-205926.jpeg"
                        .to_string(),
                },
            ],
            popular_tags: vec![
                "earbuds".to_string(),
                "power bank".to_string(),
                "charger".to_string(),
            ],
        },
        Category {
            id: CategoryId::new("groceries"),
            name: "Groceries".to_string(),
            image: "https://images.pexels.com/photos/264636/pexels-photo-264636.jpeg".to_string(),
            subcategories: vec![Subcategory {
                id: CategoryId::new("groceries-pantry"),
                name: "Pantry".to_string(),
                image: "https://images.pexels.com/photos/1435904/pexels-photo-1435904.jpeg"
                    .to_string(),
            }],
            popular_tags: vec![
                "gari".to_string(),
                "shito".to_string(),
                "palm oil".to_string(),
            ],
        },
        Category {
            id: CategoryId::new("home"),
            name: "Home & Living".to_string(),
            image: "https://images.pexels.com/photos/1643383/pexels-photo-1643383.jpeg"
                .to_string(),
            subcategories: vec![Subcategory {
                id: CategoryId::new("home-decor"),
                name: "Decor".to_string(),
                image: "https://images.pexels.com/photos/1457842/pexels-photo-1457842.jpeg"
                    .to_string(),
            }],
            popular_tags: vec!["baskets".to_string(), "cookware".to_string()],
        },
    ]
}

/// Fixture products.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("prod-kente-scarf"),
            name: "Handwoven Kente Scarf".to_string(),
            price: ghs(85.0),
            original_price: Some(ghs(110.0)),
            image: "https://images.pexels.com/photos/6192554/pexels-photo-6192554.jpeg"
                .to_string(),
            rating: 4.9,
            reviews: 87,
            shop_id: ShopId::new("shop-ama-fabrics"),
            shop_name: "Ama's Fabrics".to_string(),
            category: CategoryId::new("fashion"),
        },
        Product {
            id: ProductId::new("prod-ankara-6yards"),
            name: "Ankara Print Fabric (6 Yards)".to_string(),
            price: ghs(120.0),
            original_price: None,
            image: "https://images.pexels.com/photos/6044273/pexels-photo-6044273.jpeg"
                .to_string(),
            rating: 4.7,
            reviews: 54,
            shop_id: ShopId::new("shop-ama-fabrics"),
            shop_name: "Ama's Fabrics".to_string(),
            category: CategoryId::new("fashion"),
        },
        Product {
            id: ProductId::new("prod-ahenema-slippers"),
            name: "Ahenema Leather Slippers".to_string(),
            price: ghs(65.0),
            original_price: Some(ghs(80.0)),
            image: "https://images.pexels.com/photos/267202/pexels-photo-267202.jpeg".to_string(),
            rating: 4.4,
            reviews: 31,
            shop_id: ShopId::new("shop-ama-fabrics"),
            shop_name: "Ama's Fabrics".to_string(),
            category: CategoryId::new("fashion"),
        },
        Product {
            id: ProductId::new("prod-earbuds-pro"),
            name: "Wireless Earbuds Pro".to_string(),
            price: ghs(249.0),
            original_price: Some(ghs(320.0)),
            image: "https://images.pexels.com/photos/3825517/pexels-photo-3825517.jpeg"
                .to_string(),
            rating: 4.2,
            reviews: 203,
            shop_id: ShopId::new("shop-osu-electronics"),
            shop_name: "Osu Electronics Hub".to_string(),
            category: CategoryId::new("electronics"),
        },
        Product {
            id: ProductId::new("prod-powerbank-20k"),
            name: "20000mAh Power Bank".to_string(),
            price: ghs(180.0),
            original_price: None,
            image: "https://images.pexels.com/photos/4526407/pexels-photo-4526407.jpeg"
                .to_string(),
            rating: 4.6,
            reviews: 145,
            shop_id: ShopId::new("shop-osu-electronics"),
            shop_name: "Osu Electronics Hub".to_string(),
            category: CategoryId::new("electronics"),
        },
        Product {
            id: ProductId::new("prod-phone-stand"),
            name: "Adjustable Phone Stand".to_string(),
            price: ghs(35.0),
            original_price: None,
            image: "https://images.pexels.com/photos/4065876/pexels-photo-4065876.jpeg"
                .to_string(),
            rating: 4.0,
            reviews: 67,
            shop_id: ShopId::new("shop-osu-electronics"),
            shop_name: "Osu Electronics Hub".to_string(),
            category: CategoryId::new("electronics"),
        },
        Product {
            id: ProductId::new("prod-gari-5kg"),
            name: "Premium Gari (5kg)".to_string(),
            price: ghs(45.0),
            original_price: None,
            image: "https://images.pexels.com/photos/4110251/pexels-photo-4110251.jpeg"
                .to_string(),
            rating: 4.8,
            reviews: 92,
            shop_id: ShopId::new("shop-kaneshie-fresh"),
            shop_name: "Kaneshie Fresh Foods".to_string(),
            category: CategoryId::new("groceries"),
        },
        Product {
            id: ProductId::new("prod-shito-jar"),
            name: "Homemade Shito (Large Jar)".to_string(),
            price: ghs(28.0),
            original_price: Some(ghs(35.0)),
            image: "https://images.pexels.com/photos/4198943/pexels-photo-4198943.jpeg"
                .to_string(),
            rating: 4.9,
            reviews: 167,
            shop_id: ShopId::new("shop-kaneshie-fresh"),
            shop_name: "Kaneshie Fresh Foods".to_string(),
            category: CategoryId::new("groceries"),
        },
        Product {
            id: ProductId::new("prod-bolga-basket"),
            name: "Bolga Woven Basket".to_string(),
            price: ghs(95.0),
            original_price: None,
            image: "https://images.pexels.com/photos/4207788/pexels-photo-4207788.jpeg"
                .to_string(),
            rating: 4.5,
            reviews: 23,
            shop_id: ShopId::new("shop-adum-home"),
            shop_name: "Adum Home & Living".to_string(),
            category: CategoryId::new("home"),
        },
        Product {
            id: ProductId::new("prod-clay-pot-set"),
            name: "Clay Cooking Pot Set".to_string(),
            price: ghs(150.0),
            original_price: Some(ghs(185.0)),
            image: "https://images.pexels.com/photos/6605308/pexels-photo-6605308.jpeg"
                .to_string(),
            rating: 4.3,
            reviews: 41,
            shop_id: ShopId::new("shop-adum-home"),
            shop_name: "Adum Home & Living".to_string(),
            category: CategoryId::new("home"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_product_ids_are_unique() {
        let products = products();
        let ids: HashSet<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_every_product_references_a_fixture_shop() {
        let shop_ids: HashSet<_> = shops().into_iter().map(|s| s.id).collect();
        for product in products() {
            assert!(
                shop_ids.contains(&product.shop_id),
                "{} references unknown shop {}",
                product.id,
                product.shop_id
            );
        }
    }

    #[test]
    fn test_every_product_references_a_fixture_category() {
        let category_ids: HashSet<_> = categories().into_iter().map(|c| c.id).collect();
        for product in products() {
            assert!(
                category_ids.contains(&product.category),
                "{} references unknown category {}",
                product.id,
                product.category
            );
        }
    }

    #[test]
    fn test_shop_names_match_denormalized_copies() {
        let shops = shops();
        for product in products() {
            let shop = shops.iter().find(|s| s.id == product.shop_id).unwrap();
            assert_eq!(shop.name, product.shop_name);
        }
    }
}
