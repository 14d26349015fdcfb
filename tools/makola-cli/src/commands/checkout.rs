//! Place an order for the current cart.

use std::time::Duration;

use anyhow::Result;
use dialoguer::Confirm;

use makola_commerce::checkout::place_order;
use makola_commerce::prelude::*;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart().await?;

    // Refuses an empty cart before anything is charged.
    let summary = OrderSummary::for_items(cart.items())?;

    ctx.output.header("Order Summary");
    for item in cart.items() {
        ctx.output
            .list_item(&format!("{} x{}", item.name, item.quantity));
    }
    ctx.output.info("");
    ctx.output.kv("Subtotal", &summary.subtotal.display());
    ctx.output.kv("Delivery", &summary.delivery_fee.display());
    ctx.output.kv("Total", &summary.total.display());

    if ctx.config.checkout.confirm && !args.yes {
        ctx.output.info("");
        let confirmed = Confirm::new()
            .with_prompt("Place this order?")
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Checkout cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Processing payment...");
    tokio::time::sleep(Duration::from_millis(900)).await;
    spinner.finish_and_clear();

    let order = place_order(&mut cart)?;
    cart.shutdown().await;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output
        .success(&format!("Order {} placed", order.reference));
    ctx.output.kv("Charged", &order.total.display());
    ctx.output.info("Thank you for shopping at Makola!");

    Ok(())
}
