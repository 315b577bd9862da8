//! Trading module - the trade execution engine.
//!
//! The arithmetic (cost basis, debits/credits, aggregate valuation) lives in
//! [`engine`] as pure functions over plain values. The storage layer applies
//! them to the database inside a single transaction; the service validates
//! requests and delegates to that executor.

pub mod engine;

mod trading_errors;
mod trading_model;
mod trading_service;
mod trading_traits;

#[cfg(test)]
mod trading_engine_tests;

pub use trading_errors::TradingError;
pub use trading_model::{TradeExecution, TradeRequest};
pub use trading_service::TradingService;
pub use trading_traits::{TradeExecutorTrait, TradingServiceTrait};
