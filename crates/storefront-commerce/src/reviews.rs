//! Product reviews for delivered orders.
//!
//! A [`ReviewDraft`] holds one entry per ordered product. It can only be
//! submitted once every product has a star rating.

use serde::{Deserialize, Serialize};

use crate::catalog::non_blank;
use crate::checkout::{OrderDetails, OrderStatus};
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};

/// Lowest star rating.
pub const MIN_RATING: u8 = 1;
/// Highest star rating.
pub const MAX_RATING: u8 = 5;

/// The shopper's review of one ordered product, possibly unfinished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductReview {
    pub product_id: ProductId,
    pub rating: Option<u8>,
    pub review_text: Option<String>,
}

/// A finished review, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSubmission {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub rating: u8,
    pub review_text: Option<String>,
}

/// Reviews being written for one order.
#[derive(Debug, Clone)]
pub struct ReviewDraft {
    order_id: OrderId,
    customer_name: String,
    customer_email: Option<String>,
    entries: Vec<ProductReview>,
}

impl ReviewDraft {
    /// Start reviewing `order`. Only delivered orders can be reviewed.
    pub fn for_order(order: &OrderDetails) -> Result<Self, CommerceError> {
        if order.status != OrderStatus::Delivered {
            return Err(CommerceError::OrderNotDelivered(order.order_id.clone()));
        }

        let entries = order
            .items
            .iter()
            .map(|item| ProductReview {
                product_id: item.product_id,
                rating: None,
                review_text: None,
            })
            .collect();

        Ok(Self {
            order_id: order.order_id.clone(),
            customer_name: order.customer.full_name.clone(),
            customer_email: order.customer.email.clone(),
            entries,
        })
    }

    /// Entries in order item order.
    pub fn entries(&self) -> &[ProductReview] {
        &self.entries
    }

    /// Give `product_id` a star rating.
    pub fn rate(&mut self, product_id: ProductId, rating: u8) -> Result<(), CommerceError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(CommerceError::InvalidRating(rating));
        }
        self.entry_mut(product_id)?.rating = Some(rating);
        Ok(())
    }

    /// Attach review text to `product_id`. Blank text clears it.
    pub fn comment(
        &mut self,
        product_id: ProductId,
        text: impl Into<String>,
    ) -> Result<(), CommerceError> {
        let text = non_blank(text.into()).map(|t| t.trim().to_string());
        self.entry_mut(product_id)?.review_text = text;
        Ok(())
    }

    /// Products that still need a rating.
    pub fn missing_ratings(&self) -> Vec<ProductId> {
        self.entries
            .iter()
            .filter(|e| e.rating.is_none())
            .map(|e| e.product_id)
            .collect()
    }

    /// Finish the draft. Fails unless every product is rated.
    pub fn submit(self) -> Result<Vec<ReviewSubmission>, CommerceError> {
        let missing = self.missing_ratings().len();
        if missing > 0 {
            return Err(CommerceError::IncompleteReview(missing));
        }

        let Self {
            order_id,
            customer_name,
            customer_email,
            entries,
        } = self;

        Ok(entries
            .into_iter()
            .filter_map(|entry| {
                Some(ReviewSubmission {
                    order_id: order_id.clone(),
                    product_id: entry.product_id,
                    customer_name: customer_name.clone(),
                    customer_email: customer_email.clone(),
                    rating: entry.rating?,
                    review_text: entry.review_text,
                })
            })
            .collect())
    }

    fn entry_mut(&mut self, product_id: ProductId) -> Result<&mut ProductReview, CommerceError> {
        self.entries
            .iter_mut()
            .find(|e| e.product_id == product_id)
            .ok_or(CommerceError::NotInOrder(product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLineItem;
    use crate::catalog::ProductSnapshot;
    use crate::checkout::{CustomerDetails, PaymentMethod};
    use crate::money::{Currency, Money};
    use chrono::Utc;

    fn order(status: OrderStatus) -> OrderDetails {
        let lamp = ProductSnapshot::new(ProductId::new(1), "Lamp", 1000);
        let mug = ProductSnapshot::new(ProductId::new(2), "Mug", 500);
        OrderDetails {
            order_id: OrderId::new("ORD-42"),
            customer: CustomerDetails::new("Ada", "555-0100", "Street", "City", "Province")
                .with_email("ada@example.com"),
            items: vec![
                CartLineItem::from_snapshot(&lamp, Currency::USD, 1),
                CartLineItem::from_snapshot(&mug, Currency::USD, 3),
            ],
            total_items: 4,
            total: Money::new(2500, Currency::USD),
            order_date: Utc::now(),
            payment_method: PaymentMethod::CashOnDelivery,
            status,
        }
    }

    #[test]
    fn test_only_delivered_orders_reviewable() {
        for status in [OrderStatus::Pending, OrderStatus::Shipped, OrderStatus::Cancelled] {
            let err = ReviewDraft::for_order(&order(status)).unwrap_err();
            assert!(matches!(err, CommerceError::OrderNotDelivered(_)));
        }
        let draft = ReviewDraft::for_order(&order(OrderStatus::Delivered)).unwrap();
        assert_eq!(draft.entries().len(), 2);
    }

    #[test]
    fn test_rating_range() {
        let mut draft = ReviewDraft::for_order(&order(OrderStatus::Delivered)).unwrap();
        assert!(matches!(
            draft.rate(ProductId::new(1), 0),
            Err(CommerceError::InvalidRating(0))
        ));
        assert!(matches!(
            draft.rate(ProductId::new(1), 6),
            Err(CommerceError::InvalidRating(6))
        ));
        assert!(draft.rate(ProductId::new(1), 1).is_ok());
        assert!(draft.rate(ProductId::new(2), 5).is_ok());
        assert!(matches!(
            draft.rate(ProductId::new(9), 3),
            Err(CommerceError::NotInOrder(_))
        ));
    }

    #[test]
    fn test_submit_requires_every_rating() {
        let mut draft = ReviewDraft::for_order(&order(OrderStatus::Delivered)).unwrap();
        draft.rate(ProductId::new(1), 4).unwrap();
        assert_eq!(draft.missing_ratings(), vec![ProductId::new(2)]);

        let err = draft.submit().unwrap_err();
        assert!(matches!(err, CommerceError::IncompleteReview(1)));
    }

    #[test]
    fn test_submit_builds_reviews() {
        let mut draft = ReviewDraft::for_order(&order(OrderStatus::Delivered)).unwrap();
        draft.rate(ProductId::new(1), 4).unwrap();
        draft.rate(ProductId::new(2), 2).unwrap();
        draft.comment(ProductId::new(1), "  Bright and warm  ").unwrap();
        draft.comment(ProductId::new(2), "   ").unwrap();

        let reviews = draft.submit().unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].order_id.as_str(), "ORD-42");
        assert_eq!(reviews[0].rating, 4);
        assert_eq!(reviews[0].review_text.as_deref(), Some("Bright and warm"));
        assert_eq!(reviews[0].customer_email.as_deref(), Some("ada@example.com"));
        assert_eq!(reviews[1].review_text, None);
    }
}
