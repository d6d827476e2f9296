//! Order confirmation messages.
//!
//! Only composition lives here; delivering the message is up to whatever
//! mail service the caller uses.

use chrono::Duration;
use serde::Serialize;
use tracing::debug;

use crate::checkout::OrderDetails;
use crate::notifications::{NotificationKind, NotificationPreferences};

/// Days between placing an order and its expected delivery.
pub const EXPECTED_DELIVERY_DAYS: i64 = 3;

/// A plain-text confirmation email for a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    /// Recipient address.
    pub to: String,
    /// `"Order Confirmation - <order id>"`.
    pub subject: String,
    /// Message body.
    pub text: String,
}

impl OrderConfirmation {
    /// Build the confirmation for `order`.
    ///
    /// Returns `None` when the customer left no email or has order emails
    /// turned off.
    pub fn compose(order: &OrderDetails, prefs: &NotificationPreferences) -> Option<Self> {
        let Some(to) = order.customer.email.clone() else {
            debug!(order_id = %order.order_id, "no email for order confirmation");
            return None;
        };
        if !prefs.should_send(NotificationKind::OrderConfirmation) {
            debug!(order_id = %order.order_id, "order confirmation emails are turned off");
            return None;
        }

        Some(Self {
            to,
            subject: format!("Order Confirmation - {}", order.order_id),
            text: render_text(order),
        })
    }
}

fn render_text(order: &OrderDetails) -> String {
    let customer = &order.customer;
    let delivery = order.order_date + Duration::days(EXPECTED_DELIVERY_DAYS);

    let mut lines = vec![
        "ORDER CONFIRMATION".to_string(),
        String::new(),
        "Thank you for your order! We've received your order and will deliver it to your address."
            .to_string(),
        String::new(),
        "ORDER INFORMATION".to_string(),
        "=================".to_string(),
        format!("Order ID: {}", order.order_id),
        format!("Order Date: {}", order.order_date.format("%Y-%m-%d")),
        format!("Payment Method: {}", order.payment_method.display_name()),
        format!("Total Amount: {}", order.total),
        format!("Expected Delivery: {}", delivery.format("%A, %B %-d, %Y")),
        String::new(),
        "DELIVERY INFORMATION".to_string(),
        "====================".to_string(),
        customer.full_name.clone(),
        customer.delivery_address.clone(),
        format!("{}, {}", customer.city, customer.province),
        String::new(),
        format!("Contact: {}", customer.phone_number),
    ];
    if let Some(note) = &customer.note {
        lines.push(format!("Special Instructions: {}", note));
    }

    lines.push(String::new());
    lines.push("ORDER ITEMS".to_string());
    lines.push("===========".to_string());
    lines.extend(order.summary_lines().into_iter().map(|l| format!("• {}", l)));
    lines.push(String::new());
    lines.push(format!("TOTAL: {}", order.total));
    lines.push("Payment: Cash on Delivery - Pay when you receive your order".to_string());
    lines.push(String::new());
    lines.push("Thank you for choosing our store!".to_string());

    lines.join("\n")
}
