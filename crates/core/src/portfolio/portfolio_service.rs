use std::sync::Arc;

use super::portfolio_model::PortfolioSummary;
use super::portfolio_traits::PortfolioServiceTrait;
use crate::constants::RECENT_TRANSACTIONS_LIMIT;
use crate::errors::Result;
use crate::positions::PositionRepositoryTrait;
use crate::transactions::TransactionRepositoryTrait;
use crate::users::UserRepositoryTrait;

/// Service composing the portfolio summary from the user row, their open
/// positions, and the tail of the transaction ledger.
///
/// The aggregates come straight from the user row; they were persisted by
/// the last trade, not recomputed here.
pub struct PortfolioService {
    users: Arc<dyn UserRepositoryTrait>,
    positions: Arc<dyn PositionRepositoryTrait>,
    transactions: Arc<dyn TransactionRepositoryTrait>,
}

impl PortfolioService {
    pub fn new(
        users: Arc<dyn UserRepositoryTrait>,
        positions: Arc<dyn PositionRepositoryTrait>,
        transactions: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            users,
            positions,
            transactions,
        }
    }
}

impl PortfolioServiceTrait for PortfolioService {
    fn get_portfolio(&self, user_id: &str) -> Result<PortfolioSummary> {
        let user = self.users.get_by_id(user_id)?;
        let positions = self.positions.list_holdings(user_id)?;
        let recent_transactions = self
            .transactions
            .recent_for_user(user_id, RECENT_TRANSACTIONS_LIMIT)?;

        Ok(PortfolioSummary {
            balance: user.balance,
            portfolio_value: user.portfolio_value,
            total_profit: user.total_profit,
            positions,
            recent_transactions,
        })
    }
}
