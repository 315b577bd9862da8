use crate::errors::Result;
use crate::portfolio::portfolio_model::PortfolioSummary;

/// Trait for portfolio summary operations.
pub trait PortfolioServiceTrait: Send + Sync {
    fn get_portfolio(&self, user_id: &str) -> Result<PortfolioSummary>;
}
