//! Cart, checkout and notification preference logic for the storefront.
//!
//! This crate holds the storefront's in-session state and the small amount
//! of domain logic around it:
//!
//! - **Cart**: line items merged per product, derived totals, written to a
//!   key-value store after every change
//! - **Catalog**: product snapshots plus text and category search
//! - **Checkout**: customer details, turning the cart into an order and
//!   composing the confirmation email
//! - **Reviews**: star ratings for delivered orders
//! - **Notifications**: typed per-shopper notification preferences
//! - **Config**: TOML configuration with defaults for every field
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::prelude::*;
//! use storefront_cache::MemoryStore;
//!
//! let mut cart = CartStore::open(MemoryStore::new(), &CartConfig::default());
//! cart.add_item(&ProductSnapshot::new(ProductId::new(1), "Desk Lamp", 1000));
//! cart.add_item(&ProductSnapshot::new(ProductId::new(2), "Mug", 500));
//! cart.add_item(&ProductSnapshot::new(ProductId::new(1), "Desk Lamp", 1000));
//!
//! assert_eq!(cart.total_items(), 3);
//! println!("Total: {}", cart.total_amount()); // $25.00
//!
//! let order = place_order(&mut cart, customer, &LoggingGateway)?;
//! assert!(cart.is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod notifications;
pub mod reviews;

pub use error::CommerceError;
pub use ids::{OrderId, ProductId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{OrderId, ProductId};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{categories, CategoryFilter, ProductQuery, ProductSnapshot};

    // Cart
    pub use crate::cart::{CartLineItem, CartStore, CartTotals, LineTotal};

    // Checkout
    pub use crate::checkout::{
        place_order, CustomerDetails, LoggingGateway, OrderConfirmation, OrderDetails,
        OrderGateway, OrderStatus, PaymentMethod,
    };

    // Reviews
    pub use crate::reviews::{ReviewDraft, ReviewSubmission};

    // Notifications
    pub use crate::notifications::{NotificationKind, NotificationPreferences, PreferenceToggle};

    // Config
    pub use crate::config::{CartConfig, StorageConfig, StorefrontConfig};
}
