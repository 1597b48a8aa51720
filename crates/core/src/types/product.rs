//! Product snapshot as served by the merchant catalog.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// An immutable product snapshot.
///
/// The catalog serves prices as raw decimal strings; consumers that need to
/// do arithmetic (the cart, checkout) parse the price into an
/// [`Amount`](crate::Amount) once and keep the parsed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Raw price string as served by the backend (e.g. `"59.00"`).
    pub price: String,
    /// Image URL or asset reference.
    pub image: String,
    pub description: String,
}
