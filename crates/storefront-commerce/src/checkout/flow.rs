//! Placing an order from the cart.

use chrono::{DateTime, Utc};
use storefront_cache::KeyValueStore;
use tracing::info;

use crate::cart::CartStore;
use crate::checkout::{CustomerDetails, OrderDetails, OrderStatus, PaymentMethod};
use crate::error::CommerceError;
use crate::ids::OrderId;

/// The service that accepts placed orders.
pub trait OrderGateway {
    /// Hand the order over. An error means the order was not accepted.
    fn submit(&self, order: &OrderDetails) -> Result<(), CommerceError>;
}

/// Gateway that accepts every order and records it in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingGateway;

impl OrderGateway for LoggingGateway {
    fn submit(&self, order: &OrderDetails) -> Result<(), CommerceError> {
        info!(
            order_id = %order.order_id,
            customer = %order.customer.full_name,
            items = order.total_items,
            total = %order.total,
            payment = order.payment_method.display_name(),
            "order placed"
        );
        Ok(())
    }
}

/// Place an order for everything in `cart`.
///
/// The cart is cleared only after `gateway` accepts the order; on any error
/// it is left exactly as it was.
pub fn place_order<S: KeyValueStore>(
    cart: &mut CartStore<S>,
    customer: CustomerDetails,
    gateway: &dyn OrderGateway,
) -> Result<OrderDetails, CommerceError> {
    place_order_at(cart, customer, gateway, Utc::now())
}

/// [`place_order`] with an explicit order time.
pub fn place_order_at<S: KeyValueStore>(
    cart: &mut CartStore<S>,
    customer: CustomerDetails,
    gateway: &dyn OrderGateway,
    now: DateTime<Utc>,
) -> Result<OrderDetails, CommerceError> {
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }
    customer.validate()?;

    let order = OrderDetails {
        order_id: OrderId::for_timestamp(now),
        customer: customer.normalized(),
        items: cart.items().to_vec(),
        total_items: cart.total_items(),
        total: cart.total_amount(),
        order_date: now,
        payment_method: PaymentMethod::CashOnDelivery,
        status: OrderStatus::Pending,
    };

    gateway.submit(&order)?;
    cart.clear();
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductSnapshot;
    use crate::config::CartConfig;
    use crate::ids::ProductId;
    use crate::money::{Currency, Money};
    use chrono::TimeZone;
    use std::cell::RefCell;
    use storefront_cache::MemoryStore;

    #[derive(Default)]
    struct RecordingGateway {
        orders: RefCell<Vec<OrderDetails>>,
    }

    impl OrderGateway for RecordingGateway {
        fn submit(&self, order: &OrderDetails) -> Result<(), CommerceError> {
            self.orders.borrow_mut().push(order.clone());
            Ok(())
        }
    }

    struct RejectingGateway;

    impl OrderGateway for RejectingGateway {
        fn submit(&self, _order: &OrderDetails) -> Result<(), CommerceError> {
            Err(CommerceError::OrderRejected("service unavailable".to_string()))
        }
    }

    fn customer() -> CustomerDetails {
        CustomerDetails::new("Ada", "555-0100", "12 Analytical Way", "London", "Greater London")
    }

    fn filled_cart() -> CartStore<MemoryStore> {
        let mut cart = CartStore::open(MemoryStore::new(), &CartConfig::default());
        cart.add_item(&ProductSnapshot::new(ProductId::new(1), "Lamp", 1000));
        cart.add_item(&ProductSnapshot::new(ProductId::new(2), "Mug", 500));
        cart.add_item(&ProductSnapshot::new(ProductId::new(1), "Lamp", 1000));
        cart
    }

    #[test]
    fn test_place_order_snapshots_and_clears() {
        let mut cart = filled_cart();
        let gateway = RecordingGateway::default();
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

        let order = place_order_at(&mut cart, customer(), &gateway, now).unwrap();

        assert_eq!(order.order_id.as_str(), "ORD-1700000000000");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total_items, 3);
        assert_eq!(order.total, Money::new(2500, Currency::USD));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_method, PaymentMethod::CashOnDelivery);
        assert_eq!(gateway.orders.borrow().len(), 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_empty_cart_rejected() {
        let mut cart = CartStore::open(MemoryStore::new(), &CartConfig::default());
        let err = place_order(&mut cart, customer(), &LoggingGateway).unwrap_err();
        assert!(matches!(err, CommerceError::EmptyCart));
    }

    #[test]
    fn test_incomplete_customer_keeps_cart() {
        let mut cart = filled_cart();
        let mut details = customer();
        details.province = String::new();

        let err = place_order(&mut cart, details, &LoggingGateway).unwrap_err();
        assert!(matches!(err, CommerceError::CheckoutIncomplete(_)));
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_rejected_order_keeps_cart() {
        let mut cart = filled_cart();
        let err = place_order(&mut cart, customer(), &RejectingGateway).unwrap_err();
        assert!(matches!(err, CommerceError::OrderRejected(_)));
        assert_eq!(cart.unique_item_count(), 2);
    }
}
