//! Billfold CLI - command-line client for the wallet backend.
//!
//! # Usage
//!
//! ```bash
//! # Verify credentials against the backend
//! billfold account login -u customer
//!
//! # Show the signed-in user and credit summary
//! billfold account me
//! billfold wallet summary
//!
//! # Bills and history
//! billfold wallet bills --unpaid
//! billfold wallet transactions
//!
//! # Payments
//! billfold wallet pay-bill d290f1ee-6c54-4b01-90e6-d701748f0851
//! billfold wallet spend --amount 118.00
//!
//! # Catalog browsing
//! billfold shop sections
//! billfold shop products m-1
//! ```
//!
//! # Environment Variables
//!
//! - `BILLFOLD_API_BASE_URL` - Base URL of the wallet backend
//! - `BILLFOLD_USERNAME` / `BILLFOLD_PASSWORD` - Credentials used by
//!   authenticated commands (tokens are held in memory for the lifetime of
//!   one invocation)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "billfold")]
#[command(author, version, about = "Billfold wallet CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account and session commands
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// Wallet state and payments
    Wallet {
        #[command(subcommand)]
        action: WalletAction,
    },
    /// Merchant catalog browsing
    Shop {
        #[command(subcommand)]
        action: ShopAction,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// Verify credentials against the backend
    Login {
        /// Username (falls back to `BILLFOLD_USERNAME`)
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Show the signed-in user's details
    Me,
}

#[derive(Subcommand)]
enum WalletAction {
    /// Show the credit summary
    Summary,
    /// List bills
    Bills {
        /// Only pending and overdue bills
        #[arg(long)]
        unpaid: bool,
    },
    /// List the transaction history
    Transactions,
    /// Repay a bill by id
    PayBill {
        /// Bill id
        bill_id: String,
    },
    /// Pay a merchant payment request by id
    PayRequest {
        /// Payment request id
        request_id: String,

        /// Installment months (1 pays in full)
        #[arg(short, long, default_value_t = 1)]
        months: u8,
    },
    /// Complete a generic payment (cart checkout)
    Spend {
        /// Amount as a decimal string, e.g. 118.00
        #[arg(short, long)]
        amount: String,
    },
}

#[derive(Subcommand)]
enum ShopAction {
    /// List the sectioned shop directory
    Sections,
    /// List one shop's products
    Products {
        /// Merchant id
        merchant_id: String,
    },
    /// List merchant categories
    Categories,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Account { action } => match action {
            AccountAction::Login { username } => {
                commands::account::login(username.as_deref()).await?;
            }
            AccountAction::Me => commands::account::me().await?,
        },
        Commands::Wallet { action } => match action {
            WalletAction::Summary => commands::wallet::summary().await?,
            WalletAction::Bills { unpaid } => commands::wallet::bills(unpaid).await?,
            WalletAction::Transactions => commands::wallet::transactions().await?,
            WalletAction::PayBill { bill_id } => commands::wallet::pay_bill(&bill_id).await?,
            WalletAction::PayRequest { request_id, months } => {
                commands::wallet::pay_request(&request_id, months).await?;
            }
            WalletAction::Spend { amount } => commands::wallet::spend(&amount).await?,
        },
        Commands::Shop { action } => match action {
            ShopAction::Sections => commands::shop::sections().await?,
            ShopAction::Products { merchant_id } => {
                commands::shop::products(&merchant_id).await?;
            }
            ShopAction::Categories => commands::shop::categories().await?,
        },
    }
    Ok(())
}
