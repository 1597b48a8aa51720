//! Typed endpoint wrappers, grouped the way the backend groups its routes.
//!
//! - [`users`] - authentication and account endpoints (`users/`)
//! - [`wallets`] - bills, summary, transactions, payments (`wallets/`)
//! - [`merchants`] - catalog browsing and merchant operations (`merchants/`)

pub mod merchants;
pub mod types;
pub mod users;
pub mod wallets;
