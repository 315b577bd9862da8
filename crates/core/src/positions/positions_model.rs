//! Position domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::stocks::Stock;

/// A user's holding in one stock.
///
/// Exists only while `quantity > 0`; a position sold down to zero is deleted,
/// never retained with zero quantity. At most one position exists per
/// (user, stock) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub user_id: String,
    pub stock_id: String,
    pub quantity: i64,
    /// Weighted average price paid per share across all purchases.
    pub average_buy_price: Decimal,
    pub current_value: Decimal,
    pub profit_loss: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A position joined with its stock, as rendered in portfolio views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionHolding {
    #[serde(flatten)]
    pub position: Position,
    pub stock: Stock,
}
