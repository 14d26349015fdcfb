//! List marketplace shops.

use anyhow::Result;

use makola_commerce::prelude::*;

use super::ShopsArgs;
use crate::context::Context;

/// Run the shops command.
pub async fn run(args: ShopsArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::with_fixtures();

    if let Some(ref id) = args.shop {
        return show_shop(id, &catalog, ctx);
    }

    if ctx.output.is_json() {
        ctx.output.json(&catalog.shops());
        return Ok(());
    }

    ctx.output.header("Shops");
    ctx.output.table_row(
        &["ID", "NAME", "LOCATION", "RATING", "FOLLOWERS"],
        &[22, 26, 26, 6, 9],
    );
    ctx.output.info(&"-".repeat(96));

    for shop in catalog.shops() {
        let name = if shop.verified {
            format!("{} ✓", shop.name)
        } else {
            shop.name.clone()
        };

        ctx.output.table_row(
            &[
                shop.id.as_str(),
                &name,
                &shop.location,
                &format!("{:.1}", shop.rating),
                &shop.followers.to_string(),
            ],
            &[22, 26, 26, 6, 9],
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!("Total: {} shop(s)", catalog.shops().len()));

    Ok(())
}

fn show_shop(id: &str, catalog: &Catalog, ctx: &Context) -> Result<()> {
    let shop_id = ShopId::new(id);
    let shop = match catalog.shop(&shop_id) {
        Some(shop) => shop,
        None => return Err(CommerceError::ShopNotFound(id.to_string()).into()),
    };

    if ctx.output.is_json() {
        ctx.output.json(shop);
        return Ok(());
    }

    ctx.output.header(&shop.name);
    ctx.output.kv("ID", shop.id.as_str());
    ctx.output.kv("Category", &shop.category);
    ctx.output.kv("Location", &shop.location);
    ctx.output.kv("Rating", &format!("{:.1}", shop.rating));
    ctx.output.kv("Followers", &shop.followers.to_string());
    ctx.output.kv("Verified", if shop.verified { "yes" } else { "no" });

    let listed = catalog.products_in_shop(&shop_id);
    if !listed.is_empty() {
        ctx.output.info("");
        ctx.output.info("Products:");
        for product in listed {
            ctx.output
                .list_item(&format!("{} ({})", product.name, product.price.display()));
        }
    }

    Ok(())
}
