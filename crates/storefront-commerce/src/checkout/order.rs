//! Order types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartLineItem;
use crate::checkout::CustomerDetails;
use crate::ids::OrderId;
use crate::money::Money;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting delivery.
    #[default]
    Pending,
    /// Order handed to the courier.
    Shipped,
    /// Order delivered and paid.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// How the order is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Paid in cash to the courier.
    #[default]
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery (COD)",
        }
    }
}

/// A placed order: the cart contents copied at checkout time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDetails {
    /// Order number.
    pub order_id: OrderId,
    /// Who receives the order.
    pub customer: CustomerDetails,
    /// Items, in cart order.
    pub items: Vec<CartLineItem>,
    /// Sum of quantities.
    pub total_items: i64,
    /// Amount due.
    pub total: Money,
    /// When the order was placed.
    pub order_date: DateTime<Utc>,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Order status.
    pub status: OrderStatus,
}

impl OrderDetails {
    /// One `"<name> x<qty> - <line total>"` line per item.
    pub fn summary_lines(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| format!("{} x{} - {}", item.name, item.quantity, item.line_total()))
            .collect()
    }
}
