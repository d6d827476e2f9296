//! Cart line items and their stored form.

use crate::catalog::{non_blank_opt, ProductSnapshot};
use crate::error::StoredCartError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One product in the cart and how many of it the shopper wants.
///
/// Display fields and the unit price are copied from the catalog when the
/// product is first added and are never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "StoredLineItem", try_from = "StoredLineItem")]
pub struct CartLineItem {
    /// Catalog product id; unique within a cart.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Long description.
    pub description: Option<String>,
    /// Category label.
    pub category: Option<String>,
    /// Product image URL.
    pub image_url: Option<String>,
    /// Unit price at add-time.
    pub unit_price: Money,
    /// Quantity, at least 1 while the item is in a cart.
    pub quantity: i64,
}

impl CartLineItem {
    /// Create a line item from a product snapshot priced in `currency`.
    pub fn from_snapshot(product: &ProductSnapshot, currency: Currency, quantity: i64) -> Self {
        Self {
            product_id: product.product_id,
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            image_url: product.image_url.clone(),
            unit_price: Money::new(product.unit_price_cents, currency),
            quantity,
        }
    }

    /// `unit_price * quantity`, clamped rather than wrapping on overflow.
    pub fn line_total(&self) -> Money {
        self.unit_price.saturating_multiply(self.quantity)
    }
}

/// JSON layout of a line item in the cart blob.
///
/// Prices are written as integer minor units next to a currency code; the
/// currency may be missing in blobs written by older clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredLineItem {
    product_id: ProductId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    unit_price_cents: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    quantity: i64,
}

impl StoredLineItem {
    /// Validate and convert, using `default_currency` when the record has none.
    pub(crate) fn into_line_item(
        self,
        default_currency: Currency,
    ) -> Result<CartLineItem, StoredCartError> {
        if self.quantity < 1 {
            return Err(StoredCartError::InvalidQuantity {
                product_id: self.product_id,
                quantity: self.quantity,
            });
        }
        if self.unit_price_cents < 0 {
            return Err(StoredCartError::NegativePrice {
                product_id: self.product_id,
                cents: self.unit_price_cents,
            });
        }
        let currency = match self.currency {
            Some(code) => {
                Currency::from_code(&code).ok_or(StoredCartError::UnknownCurrency(code))?
            }
            None => default_currency,
        };

        Ok(CartLineItem {
            product_id: self.product_id,
            name: self.name,
            description: non_blank_opt(self.description),
            category: non_blank_opt(self.category),
            image_url: non_blank_opt(self.image_url),
            unit_price: Money::new(self.unit_price_cents, currency),
            quantity: self.quantity,
        })
    }
}

impl From<CartLineItem> for StoredLineItem {
    fn from(item: CartLineItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            description: item.description,
            category: item.category,
            image_url: item.image_url,
            unit_price_cents: item.unit_price.amount_cents,
            currency: Some(item.unit_price.currency.code().to_string()),
            quantity: item.quantity,
        }
    }
}

impl TryFrom<StoredLineItem> for CartLineItem {
    type Error = StoredCartError;

    fn try_from(stored: StoredLineItem) -> Result<Self, Self::Error> {
        stored.into_line_item(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lamp() -> CartLineItem {
        CartLineItem::from_snapshot(
            &ProductSnapshot::new(ProductId::new(1), "Lamp", 1050).with_category("Home"),
            Currency::USD,
            2,
        )
    }

    #[test]
    fn test_line_total() {
        assert_eq!(lamp().line_total(), Money::new(2100, Currency::USD));
    }

    #[test]
    fn test_stored_layout() {
        let value = serde_json::to_value(lamp()).unwrap();
        assert_eq!(
            value,
            json!({
                "productId": 1,
                "name": "Lamp",
                "category": "Home",
                "unitPriceCents": 1050,
                "currency": "USD",
                "quantity": 2
            })
        );
    }

    #[test]
    fn test_large_price_is_exact_after_reload() {
        // Above 2^53, where a float amount would lose the last cent
        let mut item = lamp();
        item.unit_price = Money::new(9_007_199_254_740_993, Currency::USD);

        let json = serde_json::to_string(&item).unwrap();
        let back: CartLineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unit_price.amount_cents, 9_007_199_254_740_993);
    }

    #[test]
    fn test_missing_currency_uses_default() {
        let stored: StoredLineItem = serde_json::from_value(json!({
            "productId": 4,
            "name": "Mug",
            "unitPriceCents": 725,
            "quantity": 1
        }))
        .unwrap();
        let item = stored.into_line_item(Currency::EUR).unwrap();
        assert_eq!(item.unit_price, Money::new(725, Currency::EUR));
    }

    #[test]
    fn test_rejects_invalid_records() {
        let cases = [
            (
                json!({"productId": 1, "name": "A", "unitPriceCents": 100, "quantity": 0}),
                StoredCartError::InvalidQuantity {
                    product_id: ProductId::new(1),
                    quantity: 0,
                },
            ),
            (
                json!({"productId": 1, "name": "A", "unitPriceCents": -100, "quantity": 1}),
                StoredCartError::NegativePrice {
                    product_id: ProductId::new(1),
                    cents: -100,
                },
            ),
            (
                json!({
                    "productId": 1,
                    "name": "A",
                    "unitPriceCents": 100,
                    "currency": "XYZ",
                    "quantity": 1
                }),
                StoredCartError::UnknownCurrency("XYZ".to_string()),
            ),
        ];
        for (record, expected) in cases {
            let stored: StoredLineItem = serde_json::from_value(record).unwrap();
            assert_eq!(stored.into_line_item(Currency::USD).unwrap_err(), expected);
        }
    }

    #[test]
    fn test_blank_display_copy_reads_as_none() {
        let item: CartLineItem = serde_json::from_value(json!({
            "productId": 1,
            "name": "A",
            "description": "",
            "unitPriceCents": 100,
            "quantity": 1
        }))
        .unwrap();
        assert_eq!(item.description, None);
    }
}
