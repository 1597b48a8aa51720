//! Core types for Billfold.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod product;
pub mod status;
pub mod token;

pub use id::*;
pub use money::{Amount, AmountError};
pub use product::Product;
pub use status::*;
pub use token::TokenPair;
