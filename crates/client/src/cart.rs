//! Client-side cart aggregate.
//!
//! The authoritative view of "what the user intends to buy" - a map from
//! product id to line item, maintained entirely in memory with no backend
//! round-trips. Discarded (cleared) after a confirmed payment or at session
//! end; never persisted across process restarts.

use std::collections::HashMap;

use billfold_core::{Amount, Product, ProductId};
use tracing::warn;

/// One product entry in the cart plus its quantity.
///
/// The unit price is parsed from the product's raw price string once, when
/// the line is inserted; totals never re-parse the string, so they stay
/// stable even if the catalog's price formatting varies between fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    product: Product,
    quantity: u32,
    unit_price: Amount,
}

impl LineItem {
    /// The product snapshot captured when the line was added.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Always >= 1; a line that would drop to 0 is removed instead.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price cached at add-time.
    #[must_use]
    pub const fn unit_price(&self) -> Amount {
        self.unit_price
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Amount {
        self.unit_price.times(self.quantity)
    }
}

/// In-memory shopping cart.
///
/// Invariants: at most one line item per product id, and every line item
/// has quantity >= 1. All operations are total over valid input; the only
/// rejected input is a product whose price does not parse, which is logged
/// and reported without touching the cart.
///
/// The cart expects single-owner access (`&mut self`). Callers that share
/// a cart across genuinely concurrent tasks must wrap it in a mutex to keep
/// the invariants; typical UI event handlers are already serialized.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: HashMap<ProductId, LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product` to the cart.
    ///
    /// If the product is already present its quantity is incremented;
    /// otherwise a new line item is inserted with quantity 1 and the price
    /// parsed and cached at insertion time.
    ///
    /// Returns `false` (and leaves the cart unchanged) if the product's
    /// price string does not parse to a non-negative decimal.
    pub fn add(&mut self, product: &Product) -> bool {
        if let Some(item) = self.items.get_mut(&product.id) {
            item.quantity += 1;
            return true;
        }

        let unit_price = match Amount::parse(&product.price) {
            Ok(price) => price,
            Err(err) => {
                warn!(
                    product_id = %product.id,
                    price = %product.price,
                    error = %err,
                    "rejected product with invalid price"
                );
                return false;
            }
        };

        self.items.insert(
            product.id.clone(),
            LineItem {
                product: product.clone(),
                quantity: 1,
                unit_price,
            },
        );
        true
    }

    /// Remove one unit of the given product.
    ///
    /// A line at quantity 1 is removed entirely; an absent product id is a
    /// no-op. The cart never holds a zero or negative quantity.
    pub fn remove(&mut self, product_id: &ProductId) {
        let Some(item) = self.items.get_mut(product_id) else {
            return;
        };

        if item.quantity > 1 {
            item.quantity -= 1;
        } else {
            self.items.remove(product_id);
        }
    }

    /// Reset to the empty cart. Used after a confirmed payment.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities across all line items; 0 for an empty cart.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items.values().map(LineItem::quantity).sum()
    }

    /// Sum of cached unit price times quantity; zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Amount {
        self.items.values().map(LineItem::subtotal).sum()
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items (not total quantity).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The line item for a product, if present.
    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.get(product_id)
    }

    /// Iterate over line items in arbitrary order.
    pub fn items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.values()
    }
}
