//! Pure trade execution arithmetic.
//!
//! Every function here operates on plain values so the storage layer can run
//! the whole buy/sell sequence inside a single database transaction and the
//! math stays independently testable.
//!
//! Numeric policy: the cash-moving figure (`trade_amount`) is rounded to two
//! decimal places with midpoints away from zero; the weighted average buy
//! price is kept at full precision until persisted.

use rust_decimal::{Decimal, RoundingStrategy};

use super::trading_errors::TradingError;
use crate::constants::MONEY_SCALE;

/// Rounds a monetary amount to the cash scale, midpoint away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// The cash amount a trade moves: `round(price * quantity, 2)`.
pub fn trade_amount(price: Decimal, quantity: i64) -> Decimal {
    round_money(price * Decimal::from(quantity))
}

/// The mutable figures of a position, independent of identity columns.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionFigures {
    pub quantity: i64,
    pub average_buy_price: Decimal,
    pub current_value: Decimal,
    pub profit_loss: Decimal,
}

/// Outcome of selling from an existing position.
#[derive(Debug, Clone, PartialEq)]
pub enum SellOutcome {
    /// The sale exhausted the position; the row must be deleted.
    Closed,
    /// Part of the position remains with these figures.
    Reduced(PositionFigures),
}

/// Debits `amount` from `balance`, rejecting the trade if funds are short.
pub fn debit(balance: Decimal, amount: Decimal) -> Result<Decimal, TradingError> {
    if balance < amount {
        return Err(TradingError::InsufficientFunds {
            required: amount,
            available: balance,
        });
    }
    Ok(balance - amount)
}

/// Figures for a position opened by a first BUY of a stock.
pub fn open_position(quantity: i64, price: Decimal) -> PositionFigures {
    PositionFigures {
        quantity,
        average_buy_price: price,
        current_value: trade_amount(price, quantity),
        profit_loss: Decimal::ZERO,
    }
}

/// Applies a BUY to an existing position: weighted-average cost basis,
/// cost value accrual, and profit/loss against the current market price.
pub fn apply_buy(
    current: &PositionFigures,
    quantity: i64,
    price: Decimal,
    market_price: Decimal,
) -> PositionFigures {
    let total_cost = trade_amount(price, quantity);
    let new_quantity = current.quantity + quantity;
    let new_quantity_dec = Decimal::from(new_quantity);
    let new_average = (Decimal::from(current.quantity) * current.average_buy_price + total_cost)
        / new_quantity_dec;

    PositionFigures {
        quantity: new_quantity,
        average_buy_price: new_average,
        current_value: current.current_value + total_cost,
        profit_loss: new_quantity_dec * market_price - new_quantity_dec * new_average,
    }
}

/// Applies a SELL to an existing position.
///
/// A partial sale preserves the cost basis: the average buy price is
/// untouched and the remaining value is `remaining * average`.
pub fn apply_sell(
    current: &PositionFigures,
    quantity: i64,
    market_price: Decimal,
) -> Result<SellOutcome, TradingError> {
    if current.quantity < quantity {
        return Err(TradingError::InsufficientShares {
            requested: quantity,
            held: current.quantity,
        });
    }
    if current.quantity == quantity {
        return Ok(SellOutcome::Closed);
    }

    let remaining = current.quantity - quantity;
    let remaining_dec = Decimal::from(remaining);
    Ok(SellOutcome::Reduced(PositionFigures {
        quantity: remaining,
        average_buy_price: current.average_buy_price,
        current_value: remaining_dec * current.average_buy_price,
        profit_loss: remaining_dec * (market_price - current.average_buy_price),
    }))
}

/// Portfolio market value: sum of `quantity * current market price` over all
/// of the account's positions. Always recomputed from scratch to avoid drift.
pub fn portfolio_value<I>(holdings: I) -> Decimal
where
    I: IntoIterator<Item = (i64, Decimal)>,
{
    holdings
        .into_iter()
        .map(|(quantity, market_price)| Decimal::from(quantity) * market_price)
        .sum()
}

/// Total profit/loss: sum of per-position profit/loss figures.
pub fn total_profit<I>(profits: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    profits.into_iter().sum()
}
