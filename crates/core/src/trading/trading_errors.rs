//! Typed trade rejection errors.
//!
//! These are expected business outcomes, not system failures: the API layer
//! maps each variant to a distinct user-facing message and status code.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TradingError {
    #[error("Account '{0}' not found")]
    AccountNotFound(String),

    #[error("Stock '{0}' not found")]
    StockNotFound(String),

    #[error("No open position for stock '{stock_id}'")]
    PositionNotFound { stock_id: String },

    #[error("Insufficient funds: trade costs {required} but balance is {available}")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },

    #[error("Insufficient shares: tried to sell {requested} but only {held} held")]
    InsufficientShares { requested: i64, held: i64 },
}

impl TradingError {
    /// True for variants caused by a missing record rather than a
    /// violated business rule.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TradingError::AccountNotFound(_)
                | TradingError::StockNotFound(_)
                | TradingError::PositionNotFound { .. }
        )
    }
}
