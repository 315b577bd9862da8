use async_trait::async_trait;

use crate::errors::Result;
use crate::trading::trading_model::{TradeExecution, TradeRequest};

/// Trait for the transactional trade executor.
///
/// Implementations must run the entire buy/sell sequence - balance
/// mutation, position create/update/delete, ledger append, aggregate
/// recomputation - as a single all-or-nothing unit, serialized against
/// other trades on the same store.
#[async_trait]
pub trait TradeExecutorTrait: Send + Sync {
    async fn execute(&self, request: TradeRequest) -> Result<TradeExecution>;
}

/// Trait for trade service operations.
#[async_trait]
pub trait TradingServiceTrait: Send + Sync {
    async fn execute_trade(&self, request: TradeRequest) -> Result<TradeExecution>;
}
