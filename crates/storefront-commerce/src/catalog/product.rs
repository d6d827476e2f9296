//! Product snapshots handed to the cart.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// The catalog fields a line item copies at the moment a product is added.
///
/// The price is a bare amount in minor units; the cart it is added to
/// supplies the currency, so a snapshot cannot disagree with its cart.
///
/// Display copy is optional; blank strings are treated as absent so that
/// "no description" has exactly one representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Catalog product id.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Price at the time of the snapshot, in minor units of the cart currency.
    pub unit_price_cents: i64,
    /// Long description.
    pub description: Option<String>,
    /// Category label.
    pub category: Option<String>,
    /// Product image URL.
    pub image_url: Option<String>,
}

impl ProductSnapshot {
    /// Create a snapshot with no display copy beyond the name.
    pub fn new(product_id: ProductId, name: impl Into<String>, unit_price_cents: i64) -> Self {
        Self {
            product_id,
            name: name.into(),
            unit_price_cents,
            description: None,
            category: None,
            image_url: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_blank(description.into());
        self
    }

    /// Set the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(category.into());
        self
    }

    /// Set the image URL.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = non_blank(image_url.into());
        self
    }
}

/// Map blank strings to `None`.
pub(crate) fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Like [`non_blank`] for an already optional value.
pub(crate) fn non_blank_opt(value: Option<String>) -> Option<String> {
    value.and_then(non_blank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_builder() {
        let p = ProductSnapshot::new(ProductId::new(3), "Desk Lamp", 2999)
            .with_description("Warm light")
            .with_category("Home")
            .with_image_url("https://img.example/lamp.png");

        assert_eq!(p.product_id, ProductId::new(3));
        assert_eq!(p.unit_price_cents, 2999);
        assert_eq!(p.description.as_deref(), Some("Warm light"));
        assert_eq!(p.category.as_deref(), Some("Home"));
        assert_eq!(p.image_url.as_deref(), Some("https://img.example/lamp.png"));
    }

    #[test]
    fn test_blank_copy_is_none() {
        let p = ProductSnapshot::new(ProductId::new(3), "Desk Lamp", 2999)
            .with_description("   ")
            .with_category("");
        assert_eq!(p.description, None);
        assert_eq!(p.category, None);
    }
}
