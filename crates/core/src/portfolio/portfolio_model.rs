//! Portfolio summary models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::positions::PositionHolding;
use crate::transactions::TransactionEntry;

/// Everything the portfolio page needs: cash, the persisted aggregates,
/// all open positions with their stocks, and the latest trades.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub balance: Decimal,
    pub portfolio_value: Decimal,
    pub total_profit: Decimal,
    pub positions: Vec<PositionHolding>,
    pub recent_transactions: Vec<TransactionEntry>,
}
