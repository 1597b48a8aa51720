//! Non-negative decimal money amounts.
//!
//! The backend serializes every monetary value as a decimal string
//! (`"199.00"`). `Amount` parses that string exactly once and keeps the
//! parsed `Decimal`; totals computed from an `Amount` never re-parse the
//! raw wire representation.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Amount`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// The input string is not a valid decimal number.
    #[error("not a decimal number: {0:?}")]
    NotANumber(String),
    /// The parsed value is negative.
    #[error("amount cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative decimal money amount.
///
/// ## Constraints
///
/// - Parses from the backend's decimal-string representation
/// - Value must be >= 0 (a price of `-1.00` is rejected at the boundary)
///
/// ## Examples
///
/// ```
/// use billfold_core::Amount;
///
/// let price = Amount::parse("199.50").expect("valid");
/// assert_eq!(price.to_string(), "199.50");
///
/// assert!(Amount::parse("abc").is_err());
/// assert!(Amount::parse("-1").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Amount(#[serde(with = "rust_decimal::serde::str")] Decimal);

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Parse an `Amount` from a decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a decimal number or is negative.
    pub fn parse(s: &str) -> Result<Self, AmountError> {
        let value =
            Decimal::from_str(s.trim()).map_err(|_| AmountError::NotANumber(s.to_string()))?;
        Self::try_from(value)
    }

    /// Get the underlying decimal value.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Multiply by a quantity, e.g. for a cart line subtotal.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative(value));
        }
        Ok(Self(value))
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, std::ops::Add::add)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
