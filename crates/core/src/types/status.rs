//! Status enums for wallet entities.

use serde::{Deserialize, Serialize};

/// Installment bill status.
///
/// Maps to the backend's bill status values; `Pending` and `Overdue`
/// together form the "unpaid" set returned by `wallets/bills/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillStatus {
    #[default]
    Pending,
    Overdue,
    Paid,
}

impl BillStatus {
    /// Whether the bill still needs a payment.
    #[must_use]
    pub const fn is_unpaid(self) -> bool {
        matches!(self, Self::Pending | Self::Overdue)
    }
}

/// Merchant payment request status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentRequestStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}
