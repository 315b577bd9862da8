//! Transaction ledger domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::stocks::Stock;

/// Side of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }
}

impl std::str::FromStr for TradeSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(TradeSide::Buy),
            "SELL" => Ok(TradeSide::Sell),
            other => Err(format!("Unknown trade side: {other}")),
        }
    }
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable record of a single executed trade.
///
/// Rows are append-only: the ledger is never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub stock_id: String,
    pub side: TradeSide,
    pub quantity: i64,
    pub price: Decimal,
    pub total_amount: Decimal,
    pub timestamp: NaiveDateTime,
}

/// Input model for appending a ledger record; id and timestamp are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub user_id: String,
    pub stock_id: String,
    pub side: TradeSide,
    pub quantity: i64,
    pub price: Decimal,
    pub total_amount: Decimal,
}

/// A ledger record joined with the stock it refers to, as rendered in
/// transaction history views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEntry {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub stock: Stock,
}

/// One page of a user's transaction history, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub transactions: Vec<TransactionEntry>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}
