use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::db;
use crate::models::{TransactionKind, TransactionListResult, WalletTransaction};
use crate::utils::Table;

pub const TRANSACTIONS_PER_PAGE: u32 = 10;

/// Errors surfaced by the transaction service. A wallet with no matching
/// records is NOT an error; storage failures are.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage unavailable: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("No transaction found with id {0}")]
    TransactionNotFound(String),
    #[error("Unknown transaction kind '{0}', expected debit or credit")]
    InvalidKind(String),
    #[error("Transaction amount must be a finite number, got {0}")]
    InvalidAmount(f64),
    #[error("Invalid page number. This wallet has {total_pages} page(s)")]
    InvalidPage { page: u32, total_pages: u32 },
}

/// Record a new transaction for a wallet and return the stored record
pub async fn record_transaction(
    pool: &SqlitePool,
    wallet_id: &str,
    kind: &str,
    amount: f64,
) -> Result<WalletTransaction, ServiceError> {
    let kind = TransactionKind::parse(kind).ok_or_else(|| ServiceError::InvalidKind(kind.to_string()))?;

    if !amount.is_finite() {
        return Err(ServiceError::InvalidAmount(amount));
    }

    let tx = WalletTransaction {
        uuid: Uuid::new_v4().to_string(),
        wallet_id: wallet_id.to_string(),
        kind,
        amount,
        date_created: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    };

    db::transaction::insert_transaction(pool, &tx).await?;
    debug!("Recorded {} transaction {} for wallet {}", kind, tx.uuid, wallet_id);

    Ok(tx)
}

/// Get all transactions for a wallet. An unknown wallet id is a valid query
/// with an empty result.
pub async fn get_wallet_transactions(
    pool: &SqlitePool,
    wallet_id: &str,
) -> Result<Vec<WalletTransaction>, ServiceError> {
    let transactions = db::transaction::get_transactions_by_wallet(pool, wallet_id).await?;
    debug!("Wallet {} has {} transaction(s)", wallet_id, transactions.len());

    Ok(transactions)
}

/// Get a wallet's full transaction history as a formatted listing
pub async fn get_wallet_history(
    pool: &SqlitePool,
    wallet_id: &str,
) -> Result<TransactionListResult, ServiceError> {
    let transactions = get_wallet_transactions(pool, wallet_id).await?;

    if transactions.is_empty() {
        return Ok(TransactionListResult {
            formatted_message: String::new(),
            is_empty: true,
        });
    }

    let mut message = format!(
        "Transaction history for wallet {} ({} total)\n",
        wallet_id,
        transactions.len()
    );
    message.push_str(&render_transaction_table(&transactions));

    Ok(TransactionListResult {
        formatted_message: message,
        is_empty: false,
    })
}

/// Get one page of a wallet's transaction history (10 per page)
pub async fn get_wallet_history_page(
    pool: &SqlitePool,
    wallet_id: &str,
    page: u32,
) -> Result<TransactionListResult, ServiceError> {
    let (transactions, total_count) = db::transaction::get_transactions_by_wallet_paginated(
        pool,
        wallet_id,
        page,
        TRANSACTIONS_PER_PAGE,
    )
    .await?;

    let per_page = TRANSACTIONS_PER_PAGE as u64;
    let total_pages = ((total_count + per_page - 1) / per_page) as u32;

    if transactions.is_empty() && page == 1 {
        return Ok(TransactionListResult {
            formatted_message: String::new(),
            is_empty: true,
        });
    }

    if transactions.is_empty() {
        return Err(ServiceError::InvalidPage { page, total_pages });
    }

    let mut message = format!("Transaction history for wallet {}\n", wallet_id);
    message.push_str(&render_transaction_table(&transactions));
    message.push_str(&format!(
        "\nPage {}/{} ({} total transactions)",
        page, total_pages, total_count
    ));

    Ok(TransactionListResult {
        formatted_message: message,
        is_empty: false,
    })
}

/// Get a single transaction by its id. Unlike the wallet lookup, a missing
/// record here is an error.
pub async fn get_transaction_detail(
    pool: &SqlitePool,
    uuid: &str,
) -> Result<WalletTransaction, ServiceError> {
    db::transaction::get_transaction_by_uuid(pool, uuid)
        .await?
        .ok_or_else(|| ServiceError::TransactionNotFound(uuid.to_string()))
}

/// Count a wallet's transactions
pub async fn count_wallet_transactions(
    pool: &SqlitePool,
    wallet_id: &str,
) -> Result<u64, ServiceError> {
    Ok(db::transaction::count_transactions_by_wallet(pool, wallet_id).await?)
}

fn render_transaction_table(transactions: &[WalletTransaction]) -> String {
    let mut table = Table::new(vec!["UUID", "KIND", "AMOUNT", "DATE CREATED"]);
    for tx in transactions {
        let amount = format!("{:.2}", tx.amount);
        table.add_row(vec![
            tx.uuid.as_str(),
            tx.kind.as_str(),
            amount.as_str(),
            tx.date_created.as_str(),
        ]);
    }
    table.render()
}
