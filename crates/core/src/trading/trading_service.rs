use log::debug;
use std::sync::Arc;

use super::trading_model::{TradeExecution, TradeRequest};
use super::trading_traits::{TradeExecutorTrait, TradingServiceTrait};
use crate::errors::Result;

/// Service for executing trades.
///
/// Validation happens here, before any store access; the atomic mutation is
/// delegated to the storage-layer executor.
pub struct TradingService {
    executor: Arc<dyn TradeExecutorTrait>,
}

impl TradingService {
    pub fn new(executor: Arc<dyn TradeExecutorTrait>) -> Self {
        Self { executor }
    }
}

#[async_trait::async_trait]
impl TradingServiceTrait for TradingService {
    async fn execute_trade(&self, request: TradeRequest) -> Result<TradeExecution> {
        request.validate()?;
        debug!(
            "Executing {} of {} x {} for user {}",
            request.side, request.quantity, request.stock_id, request.user_id
        );
        self.executor.execute(request).await
    }
}
