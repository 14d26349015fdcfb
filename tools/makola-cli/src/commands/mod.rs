//! CLI command implementations.

pub mod cart;
pub mod categories;
pub mod checkout;
pub mod config;
pub mod products;
pub mod shops;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Search product names.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter by shop ID.
    #[arg(long)]
    pub shop: Option<String>,

    /// Filter by category ID.
    #[arg(long)]
    pub category: Option<String>,

    /// Show only discounted products.
    #[arg(long)]
    pub on_sale: bool,
}

/// Arguments for the shops command.
#[derive(Args)]
pub struct ShopsArgs {
    /// Show full details for a single shop.
    pub shop: Option<String>,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Include subcategories and popular tags.
    #[arg(short, long)]
    pub full: bool,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart contents.
    Show,
    /// Add one unit of a product to the cart.
    Add {
        /// Product ID.
        product: String,
    },
    /// Remove a product from the cart.
    Remove {
        /// Product ID.
        product: String,
    },
    /// Set the quantity of a product already in the cart.
    Set {
        /// Product ID.
        product: String,
        /// New quantity (0 removes the line).
        quantity: i64,
    },
    /// Remove every item from the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
