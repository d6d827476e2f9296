//! Shopping cart module.
//!
//! Contains the cart store, its line items and derived totals.

mod line_item;
mod store;
mod totals;

pub use line_item::CartLineItem;
pub use store::CartStore;
pub use totals::{CartTotals, LineTotal};
