//! Show and edit the shopping cart.

use anyhow::Result;
use dialoguer::Confirm;

use makola_commerce::prelude::*;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(CartCommand::Show) | None => show(ctx).await,
        Some(CartCommand::Add { product }) => add(&product, ctx).await,
        Some(CartCommand::Remove { product }) => remove(&product, ctx).await,
        Some(CartCommand::Set { product, quantity }) => set(&product, quantity, ctx).await,
        Some(CartCommand::Clear { yes }) => clear(yes, ctx).await,
    }
}

async fn show(ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart().await?;

    if ctx.output.is_json() {
        ctx.output.json(&cart.items());
        return Ok(());
    }

    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        ctx.output.info("Run `makola products` to browse the catalog.");
        return Ok(());
    }

    ctx.output.header("Your Cart");
    ctx.output.table_row(&["ID", "NAME", "QTY", "EACH", "LINE"], &[22, 30, 4, 10, 10]);
    ctx.output.info(&"-".repeat(84));

    for item in cart.items() {
        ctx.output.table_row(
            &[
                item.id.as_str(),
                &item.name,
                &item.quantity.to_string(),
                &item.price.display(),
                &item.line_total().display(),
            ],
            &[22, 30, 4, 10, 10],
        );
    }

    ctx.output.info("");
    ctx.output.kv("Items", &cart.item_count().to_string());
    ctx.output.kv("Total", &cart.total().display());

    Ok(())
}

async fn add(product: &str, ctx: &Context) -> Result<()> {
    let catalog = Catalog::with_fixtures();
    let product_id = ProductId::new(product);

    let found = match catalog.product(&product_id) {
        Some(p) => p,
        None => return Err(CommerceError::ProductNotFound(product.to_string()).into()),
    };

    let mut cart = ctx.open_cart().await?;
    cart.add_item(ProductSnapshot::from(found));

    let count = cart.item_count();
    let total = cart.total();
    cart.shutdown().await;

    ctx.output
        .success(&format!("Added {} to the cart", found.name));
    ctx.output.kv("Items", &count.to_string());
    ctx.output.kv("Total", &total.display());

    Ok(())
}

async fn remove(product: &str, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart().await?;

    let removed = cart.remove_item(&ProductId::new(product));
    cart.shutdown().await;

    if removed {
        ctx.output
            .success(&format!("Removed '{}' from the cart", product));
    } else {
        ctx.output.warn(&format!("'{}' is not in the cart", product));
    }

    Ok(())
}

async fn set(product: &str, quantity: i64, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart().await?;

    let changed = cart.update_quantity(&ProductId::new(product), quantity);
    cart.shutdown().await;

    if !changed {
        ctx.output.warn(&format!("'{}' is not in the cart", product));
        return Ok(());
    }

    if quantity <= 0 {
        ctx.output
            .success(&format!("Removed '{}' from the cart", product));
    } else {
        ctx.output
            .success(&format!("Set '{}' to {}", product, quantity));
    }

    Ok(())
}

async fn clear(yes: bool, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart().await?;

    if cart.is_empty() {
        ctx.output.info("Cart is already empty.");
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} item(s) from the cart?",
                cart.item_count()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cancelled");
            return Ok(());
        }
    }

    cart.clear();
    cart.shutdown().await;

    ctx.output.success("Cart cleared");

    Ok(())
}
