//! Response and request types for the wallet backend API.
//!
//! Field names mirror the backend's JSON exactly; monetary fields arrive as
//! decimal strings and deserialize into [`Amount`] (parsed once at the
//! boundary).

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use billfold_core::{
    Amount, BillId, BillStatus, CategoryId, MerchantId, PaymentRequestId, PaymentRequestStatus,
    ProductId, TransactionId, UserId,
};

// =============================================================================
// Users
// =============================================================================

/// The authenticated user's account record (`users/me/`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Registration payload (`users/register/`).
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
}

// =============================================================================
// Wallets
// =============================================================================

/// Credit summary for the current user (`wallets/me/summary/`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditSummary {
    /// Credit still available to spend.
    pub available: Amount,
    /// Total credit line.
    pub total: Amount,
    pub currency: String,
}

/// An installment bill (`wallets/home/bills/`, `wallets/bills/`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    pub amount_due: Amount,
    pub due_date: NaiveDate,
    pub status: BillStatus,
    pub merchant_name: String,
}

/// One wallet ledger entry (`wallets/me/transactions/`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub amount: Amount,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub merchant_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Confirmation returned by the payment endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub message: String,
    /// Present when the payment created a new ledger entry; bill repayments
    /// return a message only.
    #[serde(default)]
    pub transaction_id: Option<TransactionId>,
}

// =============================================================================
// Merchants
// =============================================================================

/// A shop card on the "near you" screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    pub id: MerchantId,
    pub name: String,
    pub distance: String,
    pub image: String,
}

/// A titled group of shops (`merchants/shops-sections/`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopSection {
    pub title: String,
    pub shops: Vec<Shop>,
}

/// A titled product grouping inside one shop's detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopCategory {
    pub title: String,
    pub products: Vec<ProductId>,
}

/// Full detail record for one shop (`merchants/all-details/`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopDetails {
    pub id: MerchantId,
    pub name: String,
    pub filters: Vec<String>,
    pub highlight: Vec<ProductId>,
    pub categories: Vec<ShopCategory>,
}

/// The full shop directory, keyed by merchant id.
pub type ShopDirectory = HashMap<MerchantId, ShopDetails>;

/// A merchant category (`merchants/categories/`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Application payload for becoming a merchant (`merchants/apply/`).
#[derive(Debug, Clone, Serialize)]
pub struct MerchantApplication {
    pub name: String,
    pub tax_id: String,
    pub contact_email: String,
    pub contact_phone: String,
}

/// A payment request created by a merchant
/// (`merchants/me/transactions/request/`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub id: PaymentRequestId,
    pub amount: Amount,
    pub status: PaymentRequestStatus,
    pub merchant: MerchantSummary,
    pub created_at: DateTime<Utc>,
}

/// Minimal merchant record embedded in payment requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantSummary {
    pub id: MerchantId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bill_deserializes_from_backend_payload() {
        let json = r#"{
            "id": "d290f1ee-6c54-4b01-90e6-d701748f0851",
            "amount_due": "450.00",
            "due_date": "2025-11-01",
            "status": "PENDING",
            "merchant_name": "Corner Cafe"
        }"#;

        let bill: Bill = serde_json::from_str(json).expect("deserialize");
        assert_eq!(bill.status, BillStatus::Pending);
        assert_eq!(bill.amount_due, Amount::parse("450.00").expect("valid"));
        assert_eq!(bill.due_date, NaiveDate::from_ymd_opt(2025, 11, 1).expect("valid"));
    }

    #[test]
    fn receipt_transaction_id_is_optional() {
        let repayment: PaymentReceipt =
            serde_json::from_str(r#"{"message": "paid"}"#).expect("deserialize");
        assert!(repayment.transaction_id.is_none());

        let purchase: PaymentReceipt =
            serde_json::from_str(r#"{"message": "ok", "transaction_id": "t-1"}"#)
                .expect("deserialize");
        assert_eq!(purchase.transaction_id, Some(TransactionId::new("t-1")));
    }

    #[test]
    fn shop_directory_is_keyed_by_merchant_id() {
        let json = r#"{
            "m-1": {
                "id": "m-1",
                "name": "Corner Cafe",
                "filters": ["coffee"],
                "highlight": ["p-1"],
                "categories": [{ "title": "Drinks", "products": ["p-1", "p-2"] }]
            }
        }"#;

        let directory: ShopDirectory = serde_json::from_str(json).expect("deserialize");
        let shop = directory.get(&MerchantId::new("m-1")).expect("present");
        assert_eq!(shop.categories.len(), 1);
    }
}
