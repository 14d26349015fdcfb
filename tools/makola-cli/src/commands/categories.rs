//! List browse categories.

use anyhow::Result;

use makola_commerce::prelude::*;

use super::CategoriesArgs;
use crate::context::Context;

/// Run the categories command.
pub async fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::with_fixtures();

    if ctx.output.is_json() {
        ctx.output.json(&catalog.categories());
        return Ok(());
    }

    ctx.output.header("Categories");

    for category in catalog.categories() {
        let count = catalog.products_in_category(&category.id).len();

        ctx.output.info("");
        ctx.output.info(&format!(
            "{} ({}): {} product(s)",
            category.name,
            category.id.as_str(),
            count
        ));

        if args.full {
            for sub in &category.subcategories {
                ctx.output.list_item(&sub.name);
            }
            if !category.popular_tags.is_empty() {
                ctx.output.kv("Popular", &category.popular_tags.join(", "));
            }
        }
    }

    Ok(())
}
