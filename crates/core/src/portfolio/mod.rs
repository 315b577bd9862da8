//! Portfolio module - read-side composition of a user's holdings.

mod portfolio_model;
mod portfolio_service;
mod portfolio_traits;

pub use portfolio_model::PortfolioSummary;
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::PortfolioServiceTrait;
