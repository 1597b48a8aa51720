//! Billfold Client - SDK for the wallet backend.
//!
//! # Architecture
//!
//! Two independent leaf components form the core:
//!
//! - [`Cart`] - an in-memory map of product id to line item with derived
//!   count and total. No dependencies, no backend round-trips.
//! - [`ApiClient`] - a `reqwest`-based client that attaches a bearer token
//!   from a [`TokenStore`] before every request and performs exactly one
//!   token-refresh-and-retry cycle when a request comes back 401.
//!
//! Typed endpoint wrappers live in [`api`], grouped the way the backend
//! groups its routes (`users/`, `wallets/`, `merchants/`). Merchant catalog
//! reads are cached in-process for five minutes; wallet state never is.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use billfold_client::{ApiClient, Cart, ClientConfig, InMemoryTokenStore};
//!
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(&config, Arc::new(InMemoryTokenStore::new()))?;
//!
//! client.login("customer", "hunter2").await?;
//!
//! let mut cart = Cart::new();
//! let products = client.shop_products(&"shop-1".into()).await?;
//! for product in products.values() {
//!     cart.add(product);
//! }
//!
//! client.spend(cart.total()).await?;
//! cart.clear();
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod config;
pub mod error;
pub mod http;
pub mod token_store;

mod cache;

pub use api::types;
pub use cart::{Cart, LineItem};
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use http::ApiClient;
pub use token_store::{InMemoryTokenStore, TokenStore};
