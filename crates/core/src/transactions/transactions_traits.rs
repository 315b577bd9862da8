use crate::errors::Result;
use crate::transactions::{TransactionEntry, TransactionPage};

/// Trait for transaction ledger read operations.
///
/// Ledger writes only happen inside the trade execution transaction and are
/// therefore part of the trade executor, not this trait.
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Lists a user's transactions, newest first, with pagination metadata.
    fn list_by_user(&self, user_id: &str, page: i64, limit: i64) -> Result<TransactionPage>;

    /// Returns the user's most recent transactions.
    fn recent_for_user(&self, user_id: &str, limit: i64) -> Result<Vec<TransactionEntry>>;
}
