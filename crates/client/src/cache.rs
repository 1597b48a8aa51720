//! Cache types for merchant catalog responses.
//!
//! Only immutable catalog reads are cached; wallet state (bills, summary,
//! transactions) changes on every payment and is always fetched fresh.

use std::collections::HashMap;

use billfold_core::{MerchantId, Product, ProductId};

use crate::types::{Category, ShopDetails, ShopSection};

/// Cached value types.
#[derive(Debug, Clone)]
pub(crate) enum CacheValue {
    ShopSections(Vec<ShopSection>),
    ShopDirectory(HashMap<MerchantId, ShopDetails>),
    Products(HashMap<ProductId, Product>),
    Categories(Vec<Category>),
}
