//! The cart store: line items plus their persistence.

use std::collections::HashSet;

use storefront_cache::{Cache, KeyValueStore};
use tracing::{debug, warn};

use crate::cart::line_item::StoredLineItem;
use crate::cart::totals::{self, CartTotals};
use crate::cart::CartLineItem;
use crate::catalog::ProductSnapshot;
use crate::config::CartConfig;
use crate::error::StoredCartError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// The shopper's cart for one browsing session.
///
/// Owns the line items and writes the full item list to its key-value store
/// after every mutation. Queries take `&self`; commands take `&mut self`.
/// Commands never fail: unknown product ids are ignored and storage write
/// failures are logged and counted while the in-memory state stays
/// authoritative.
///
/// # Example
///
/// ```rust,ignore
/// let mut cart = CartStore::open(FileStore::open(".storefront")?, &config.cart);
/// cart.add_item(&product);
/// println!("{} items, {}", cart.total_items(), cart.total_amount());
/// ```
pub struct CartStore<S> {
    items: Vec<CartLineItem>,
    cache: Cache<S>,
    storage_key: String,
    currency: Currency,
    persist_failures: u64,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open a cart over a raw key-value store.
    pub fn open(store: S, config: &CartConfig) -> Self {
        Self::load(Cache::new(store), config)
    }

    /// Load the cart stored under `config.storage_key`.
    ///
    /// A missing key, an unparseable value, or records that break the cart
    /// invariants all yield an empty cart.
    pub fn load(cache: Cache<S>, config: &CartConfig) -> Self {
        let items = read_items(&cache, &config.storage_key, config.currency);
        debug!(
            key = %config.storage_key,
            items = items.len(),
            "cart loaded"
        );
        Self {
            items,
            cache,
            storage_key: config.storage_key.clone(),
            currency: config.currency,
            persist_failures: 0,
        }
    }

    /// Add one unit of `product`.
    ///
    /// An existing line for the same product gets its quantity bumped and
    /// keeps its position and original snapshot; otherwise a new line is
    /// appended. The snapshot price is read in the cart's currency.
    pub fn add_item(&mut self, product: &ProductSnapshot) {
        self.merge(product, 1);
        self.persist();
    }

    /// Add `quantity` units of `product`, as if `add_item` were called
    /// `quantity` times.
    pub fn add_item_quantity(&mut self, product: &ProductSnapshot, quantity: u32) {
        if quantity == 0 {
            return;
        }
        self.merge(product, i64::from(quantity));
        self.persist();
    }

    fn merge(&mut self, product: &ProductSnapshot, quantity: i64) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.product_id)
        {
            existing.quantity = existing.quantity.saturating_add(quantity);
            debug!(
                product_id = %product.product_id,
                quantity = existing.quantity,
                "cart item merged"
            );
        } else {
            let item = CartLineItem::from_snapshot(product, self.currency, quantity);
            self.items.push(item);
            debug!(product_id = %product.product_id, quantity, "cart item added");
        }
    }

    /// Set the quantity of a line item.
    ///
    /// `quantity <= 0` removes the item. Unknown ids are a no-op.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
            debug!(%product_id, quantity, "cart quantity set");
            self.persist();
        }
    }

    /// Remove a line item. Unknown ids are a no-op.
    pub fn remove_item(&mut self, product_id: ProductId) {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        if self.items.len() < len_before {
            debug!(%product_id, "cart item removed");
            self.persist();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cart cleared");
        self.persist();
    }

    /// Line items in the order products were first added.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Get the line item for a product.
    pub fn get_item(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> i64 {
        totals::total_items(&self.items)
    }

    /// Sum of `unit_price * quantity`.
    pub fn total_amount(&self) -> Money {
        totals::total_amount(&self.items, self.currency)
    }

    /// Full totals breakdown.
    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.items, self.currency)
    }

    /// Currency of the cart; every snapshot price is read in it.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Key the cart is stored under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Number of storage writes that failed since the cart was loaded.
    pub fn persist_failures(&self) -> u64 {
        self.persist_failures
    }

    /// The underlying cache.
    pub fn cache(&self) -> &Cache<S> {
        &self.cache
    }

    fn persist(&mut self) {
        if let Err(e) = self.cache.set(&self.storage_key, &self.items) {
            self.persist_failures += 1;
            warn!(
                key = %self.storage_key,
                error = %e,
                failures = self.persist_failures,
                "failed to persist cart; keeping in-memory state"
            );
        }
    }
}

fn read_items<S: KeyValueStore>(
    cache: &Cache<S>,
    key: &str,
    currency: Currency,
) -> Vec<CartLineItem> {
    let stored = match cache.get::<Vec<StoredLineItem>>(key) {
        Ok(Some(stored)) => stored,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "discarding unreadable stored cart");
            return Vec::new();
        }
    };

    match validate(stored, currency) {
        Ok(items) => items,
        Err(reason) => {
            warn!(key, %reason, "discarding invalid stored cart");
            Vec::new()
        }
    }
}

fn validate(
    stored: Vec<StoredLineItem>,
    currency: Currency,
) -> Result<Vec<CartLineItem>, StoredCartError> {
    let mut seen = HashSet::with_capacity(stored.len());
    let mut items = Vec::with_capacity(stored.len());

    for record in stored {
        let item = record.into_line_item(currency)?;
        if item.unit_price.currency != currency {
            return Err(StoredCartError::CurrencyMismatch {
                product_id: item.product_id,
                found: item.unit_price.currency,
                expected: currency,
            });
        }
        if !seen.insert(item.product_id) {
            return Err(StoredCartError::DuplicateProduct(item.product_id));
        }
        items.push(item);
    }

    Ok(items)
}
