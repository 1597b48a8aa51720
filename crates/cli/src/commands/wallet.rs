//! Wallet state and payment commands.

use billfold_core::{Amount, BillId, PaymentRequestId};

use super::CliError;

/// Show the credit summary.
#[allow(clippy::print_stdout)]
pub async fn summary() -> Result<(), CliError> {
    let client = super::authenticated_client().await?;
    let summary = client.credit_summary().await?;

    println!(
        "available: {} {}",
        summary.available, summary.currency
    );
    println!("total:     {} {}", summary.total, summary.currency);
    Ok(())
}

/// List bills, all or unpaid only.
#[allow(clippy::print_stdout)]
pub async fn bills(unpaid: bool) -> Result<(), CliError> {
    let client = super::authenticated_client().await?;
    let bills = if unpaid {
        client.unpaid_bills().await?
    } else {
        client.home_bills().await?
    };

    if bills.is_empty() {
        println!("No bills.");
        return Ok(());
    }

    for bill in bills {
        println!(
            "{}  {:>10}  due {}  {:?}  {}",
            bill.id, bill.amount_due, bill.due_date, bill.status, bill.merchant_name
        );
    }
    Ok(())
}

/// List the transaction history.
#[allow(clippy::print_stdout)]
pub async fn transactions() -> Result<(), CliError> {
    let client = super::authenticated_client().await?;
    let transactions = client.transactions().await?;

    if transactions.is_empty() {
        println!("No transactions.");
        return Ok(());
    }

    for txn in transactions {
        println!(
            "{}  {:>10}  {}  {}",
            txn.id,
            txn.amount,
            txn.created_at.format("%Y-%m-%d %H:%M"),
            txn.merchant_name.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

/// Repay a bill by id.
#[allow(clippy::print_stdout)]
pub async fn pay_bill(bill_id: &str) -> Result<(), CliError> {
    let client = super::authenticated_client().await?;
    let receipt = client.pay_bill(&BillId::new(bill_id)).await?;

    println!("{}", receipt.message);
    Ok(())
}

/// Pay a merchant payment request by id.
#[allow(clippy::print_stdout)]
pub async fn pay_request(request_id: &str, months: u8) -> Result<(), CliError> {
    let client = super::authenticated_client().await?;
    let receipt = client
        .pay_payment_request(&PaymentRequestId::new(request_id), months)
        .await?;

    println!("{}", receipt.message);
    if let Some(txn) = receipt.transaction_id {
        println!("transaction: {txn}");
    }
    Ok(())
}

/// Complete a generic payment for the given amount.
#[allow(clippy::print_stdout)]
pub async fn spend(amount: &str) -> Result<(), CliError> {
    let amount =
        Amount::parse(amount).map_err(|e| CliError::InvalidAmount(e.to_string()))?;

    let client = super::authenticated_client().await?;
    let receipt = client.spend(amount).await?;

    println!("{}", receipt.message);
    if let Some(txn) = receipt.transaction_id {
        println!("transaction: {txn}");
    }
    Ok(())
}
