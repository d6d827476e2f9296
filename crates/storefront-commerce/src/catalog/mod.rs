//! Product catalog module.
//!
//! The cart never reads the live catalog; it works from snapshots.

mod product;
mod search;

pub use product::ProductSnapshot;
pub(crate) use product::{non_blank, non_blank_opt};
pub use search::{categories, CategoryFilter, ProductQuery, ALL_CATEGORIES};
