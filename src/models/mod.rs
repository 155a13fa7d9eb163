//! Data models for the wallet transaction store
//!
//! Each model represents either a persisted record or the output of a
//! service operation.

pub mod transaction;

// Re-export commonly used types for convenience
pub use transaction::{TransactionKind, TransactionListResult, WalletTransaction};
