//! Browse the product catalog.

use anyhow::Result;

use makola_commerce::prelude::*;

use super::ProductsArgs;
use crate::context::Context;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::with_fixtures();

    let mut products: Vec<&Product> = if let Some(ref query) = args.search {
        catalog.search(query)
    } else if let Some(ref shop) = args.shop {
        let shop_id = ShopId::new(shop.as_str());
        if catalog.shop(&shop_id).is_none() {
            return Err(CommerceError::ShopNotFound(shop.clone()).into());
        }
        catalog.products_in_shop(&shop_id)
    } else if let Some(ref category) = args.category {
        let category_id = CategoryId::new(category.as_str());
        if catalog.category(&category_id).is_none() {
            return Err(CommerceError::CategoryNotFound(category.clone()).into());
        }
        catalog.products_in_category(&category_id)
    } else if args.on_sale {
        catalog.on_sale()
    } else {
        catalog.products().iter().collect()
    };

    if args.on_sale {
        products.retain(|p| p.is_on_sale());
    }

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    if products.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }

    ctx.output.header("Products");
    ctx.output.table_row(
        &["ID", "NAME", "PRICE", "WAS", "OFF", "SHOP"],
        &[22, 30, 10, 10, 5, 22],
    );
    ctx.output.info(&"-".repeat(100));

    for product in &products {
        let price = product.price.display();
        let was = match product.original_price.filter(|_| product.is_on_sale()) {
            Some(original) => original.display(),
            None => "-".to_string(),
        };
        let off = match product.discount_percentage() {
            Some(pct) => format!("{:.0}%", pct),
            None => "-".to_string(),
        };

        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                &price,
                &was,
                &off,
                &product.shop_name,
            ],
            &[22, 30, 10, 10, 5, 22],
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!("Total: {} product(s)", products.len()));

    Ok(())
}
