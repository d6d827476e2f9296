//! Commerce error types.

use thiserror::Error;

use crate::ids::{OrderId, ProductId};
use crate::money::Currency;

/// Errors that can occur in storefront operations.
///
/// Cart mutations never fail; these come from checkout, reviews,
/// configuration and the storage layer.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Checkout attempted with nothing in the cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// The order service refused the order.
    #[error("Order rejected: {0}")]
    OrderRejected(String),

    /// Reviews are only taken for delivered orders.
    #[error("Order {0} has not been delivered yet")]
    OrderNotDelivered(OrderId),

    /// The product is not part of the order under review.
    #[error("Product {0} is not part of this order")]
    NotInOrder(ProductId),

    /// Ratings run from 1 to 5 stars.
    #[error("Invalid rating: {0} (expected 1 to 5)")]
    InvalidRating(u8),

    /// Some ordered products have no rating yet.
    #[error("Please provide a rating for all products ({0} missing)")]
    IncompleteReview(usize),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    Cache(#[from] storefront_cache::CacheError),
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}

/// Reasons a stored cart is discarded on load.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoredCartError {
    #[error("product {product_id} has quantity {quantity}")]
    InvalidQuantity { product_id: ProductId, quantity: i64 },

    #[error("product {product_id} has negative price {cents}")]
    NegativePrice { product_id: ProductId, cents: i64 },

    #[error("unknown currency {0:?}")]
    UnknownCurrency(String),

    #[error("product {product_id} priced in {found}, cart uses {expected}")]
    CurrencyMismatch {
        product_id: ProductId,
        found: Currency,
        expected: Currency,
    },

    #[error("duplicate product {0}")]
    DuplicateProduct(ProductId),
}
