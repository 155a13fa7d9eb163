//! Wallet transaction models

use serde::Serialize;

/// A single persisted wallet transaction record
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct WalletTransaction {
    pub uuid: String,
    pub wallet_id: String,
    pub kind: TransactionKind,
    pub amount: f64,
    pub date_created: String,
}

/// Direction of a wallet transaction, stored as TEXT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Debit,
    Credit,
}

impl TransactionKind {
    /// Parse user-supplied text (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "debit" => Some(TransactionKind::Debit),
            "credit" => Some(TransactionKind::Credit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Debit => "DEBIT",
            TransactionKind::Credit => "CREDIT",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendered list of transactions for display
#[derive(Debug)]
pub struct TransactionListResult {
    pub formatted_message: String,
    pub is_empty: bool,
}
