//! Trade request/response domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::{TradeSide, Transaction};
use crate::users::AccountSummary;
use crate::{errors::ValidationError, Error, Result};

/// A validated request to execute one trade.
///
/// `price` is the current stock price as seen by the caller at call time;
/// the engine computes the cash amount from it rather than re-deriving it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequest {
    pub user_id: String,
    pub stock_id: String,
    pub side: TradeSide,
    pub quantity: i64,
    pub price: Decimal,
}

impl TradeRequest {
    pub fn validate(&self) -> Result<()> {
        if self.stock_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "stockId".to_string(),
            )));
        }
        if self.quantity <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "quantity must be a positive integer".to_string(),
            )));
        }
        if self.price <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "price must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// Result of a successfully executed trade: the appended ledger record and
/// the account figures after all mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeExecution {
    pub transaction: Transaction,
    pub account: AccountSummary,
}
