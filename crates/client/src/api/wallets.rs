//! Wallet endpoints (`wallets/`): bills, credit summary, transaction
//! history, and payment completion.
//!
//! Nothing here is cached - every call reflects the wallet's state after
//! the most recent payment.

use tracing::instrument;

use billfold_core::{Amount, BillId, PaymentRequestId};

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::{Bill, CreditSummary, PaymentReceipt, Transaction};

impl ApiClient {
    /// Fetch the bills shown on the home screen (`GET wallets/home/bills/`),
    /// ordered by due date.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn home_bills(&self) -> Result<Vec<Bill>, ApiError> {
        self.get_json("wallets/home/bills/").await
    }

    /// Fetch the unpaid (pending or overdue) bills (`GET wallets/bills/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn unpaid_bills(&self) -> Result<Vec<Bill>, ApiError> {
        self.get_json("wallets/bills/").await
    }

    /// Fetch the user's credit summary (`GET wallets/me/summary/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn credit_summary(&self) -> Result<CreditSummary, ApiError> {
        self.get_json("wallets/me/summary/").await
    }

    /// Fetch the user's transaction history
    /// (`GET wallets/me/transactions/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json("wallets/me/transactions/").await
    }

    /// Repay a specific bill (`POST wallets/bills/{id}/pay/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the bill cannot be paid (already paid,
    /// insufficient balance) or the request fails.
    #[instrument(skip(self), fields(bill_id = %bill_id))]
    pub async fn pay_bill(&self, bill_id: &BillId) -> Result<PaymentReceipt, ApiError> {
        self.post_json(&format!("wallets/bills/{bill_id}/pay/"), None)
            .await
    }

    /// Pay a merchant's payment request
    /// (`POST wallets/payment-requests/{id}/pay/`).
    ///
    /// `installment_months` is 1 for paying in full, up to 12 for the
    /// longest plan; the backend validates the range.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is rejected or fails.
    #[instrument(skip(self), fields(request_id = %request_id, installment_months))]
    pub async fn pay_payment_request(
        &self,
        request_id: &PaymentRequestId,
        installment_months: u8,
    ) -> Result<PaymentReceipt, ApiError> {
        let body = serde_json::json!({ "installment_months": installment_months });
        self.post_json(
            &format!("wallets/payment-requests/{request_id}/pay/"),
            Some(body),
        )
        .await
    }

    /// Complete a generic payment for the given amount
    /// (`POST wallets/me/generic-spend/`). Used at cart checkout.
    ///
    /// The amount is serialized as a decimal string; payment semantics
    /// (balance checks, ledger entries) are owned by the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the payment is rejected or the request fails.
    #[instrument(skip(self), fields(amount = %amount))]
    pub async fn spend(&self, amount: Amount) -> Result<PaymentReceipt, ApiError> {
        let body = serde_json::json!({ "amount": amount });
        self.post_json("wallets/me/generic-spend/", Some(body)).await
    }
}
