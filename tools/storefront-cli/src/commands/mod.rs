//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod prefs;

use clap::{Args, Subcommand};

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart contents and totals.
    Show,
    /// Add a product to the cart.
    Add(AddArgs),
    /// Set the quantity of a product (0 or less removes it).
    Update {
        /// Product ID.
        id: i64,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product from the cart.
    Remove {
        /// Product ID.
        id: i64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for adding a product.
#[derive(Args)]
pub struct AddArgs {
    /// Product ID.
    #[arg(long)]
    pub id: i64,

    /// Product name.
    #[arg(long)]
    pub name: String,

    /// Unit price as a decimal amount (e.g. 19.99).
    #[arg(long)]
    pub price: f64,

    /// Number of units to add.
    #[arg(short, long, default_value = "1")]
    pub quantity: u32,

    /// Product description.
    #[arg(long)]
    pub description: Option<String>,

    /// Product category.
    #[arg(long)]
    pub category: Option<String>,

    /// Product image URL.
    #[arg(long)]
    pub image: Option<String>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Customer full name.
    #[arg(long)]
    pub name: String,

    /// Customer phone number.
    #[arg(long)]
    pub phone: String,

    /// Delivery address.
    #[arg(long)]
    pub address: String,

    /// City.
    #[arg(long)]
    pub city: String,

    /// State/province.
    #[arg(long)]
    pub province: String,

    /// Email for the order confirmation.
    #[arg(long)]
    pub email: Option<String>,

    /// Delivery note.
    #[arg(long)]
    pub note: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the prefs command.
#[derive(Args)]
pub struct PrefsArgs {
    /// JSON file with user metadata holding `preferences.notifications`.
    #[arg(short, long, global = true)]
    pub metadata: Option<String>,

    #[command(subcommand)]
    pub command: Option<PrefsCommand>,
}

#[derive(Subcommand)]
pub enum PrefsCommand {
    /// Show every preference flag.
    Show,
    /// Check whether a notification kind would be sent.
    Check {
        /// Notification kind (order_confirmation, order_update, price_drop,
        /// new_product, marketing).
        kind: String,
    },
}
