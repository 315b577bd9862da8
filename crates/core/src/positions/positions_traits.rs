use crate::errors::Result;
use crate::positions::positions_model::PositionHolding;

/// Trait for position read operations.
///
/// Position writes only happen inside the trade execution transaction and
/// are therefore part of the trade executor, not this trait.
pub trait PositionRepositoryTrait: Send + Sync {
    /// Lists a user's positions joined with their stocks.
    fn list_holdings(&self, user_id: &str) -> Result<Vec<PositionHolding>>;
}
