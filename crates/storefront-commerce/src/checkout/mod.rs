//! Checkout module.
//!
//! Contains customer details, orders, order placement and the
//! confirmation message.

mod confirmation;
mod customer;
mod flow;
mod order;

pub use confirmation::{OrderConfirmation, EXPECTED_DELIVERY_DAYS};
pub use customer::CustomerDetails;
pub use flow::{place_order, place_order_at, LoggingGateway, OrderGateway};
pub use order::{OrderDetails, OrderStatus, PaymentMethod};
