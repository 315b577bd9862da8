//! Stock catalog module - domain models, services, and traits.

mod stocks_model;
mod stocks_service;
mod stocks_traits;

#[cfg(test)]
mod stocks_model_tests;

pub use stocks_model::{NewStock, Stock, StockSearchResult, StockUpdate};
pub use stocks_service::StockService;
pub use stocks_traits::{StockRepositoryTrait, StockServiceTrait};
