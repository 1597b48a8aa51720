//! Billfold Core - Shared types library.
//!
//! This crate provides common types used across all Billfold components:
//! - `client` - SDK talking to the wallet backend
//! - `cli` - Command-line tools built on the SDK
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no token
//! storage. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money amounts, statuses,
//!   product snapshots, and token pairs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
