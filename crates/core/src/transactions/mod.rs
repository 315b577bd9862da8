//! Transaction ledger module - immutable records of executed trades.

mod transactions_model;
mod transactions_traits;

pub use transactions_model::{
    NewTransaction, TradeSide, Transaction, TransactionEntry, TransactionPage,
};
pub use transactions_traits::TransactionRepositoryTrait;
