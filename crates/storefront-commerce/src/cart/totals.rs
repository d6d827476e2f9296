//! Cart totals.
//!
//! Totals are derived from the line items on every call and never stored.

use crate::cart::CartLineItem;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Totals breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of quantities.
    pub total_items: i64,
    /// Sum of `unit_price * quantity`.
    pub total_amount: Money,
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineTotal>,
}

impl CartTotals {
    /// Compute totals for `items`.
    pub fn compute(items: &[CartLineItem], currency: Currency) -> Self {
        let lines: Vec<LineTotal> = items.iter().map(LineTotal::from).collect();
        Self {
            total_items: total_items(items),
            total_amount: total_amount(items, currency),
            lines,
        }
    }

    /// Check if there is nothing to pay for.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Totals for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineTotal {
    /// Product ID.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// `unit_price * quantity`.
    pub total: Money,
}

impl From<&CartLineItem> for LineTotal {
    fn from(item: &CartLineItem) -> Self {
        Self {
            product_id: item.product_id,
            unit_price: item.unit_price,
            quantity: item.quantity,
            total: item.line_total(),
        }
    }
}

/// Sum of quantities across `items`.
pub(crate) fn total_items(items: &[CartLineItem]) -> i64 {
    items
        .iter()
        .fold(0_i64, |acc, item| acc.saturating_add(item.quantity))
}

/// Sum of line totals across `items`.
pub(crate) fn total_amount(items: &[CartLineItem], currency: Currency) -> Money {
    items
        .iter()
        .fold(Money::zero(currency), |acc, item| acc.saturating_add(&item.line_total()))
}
