//! Positions module - a user's current holding in one stock.

mod positions_model;
mod positions_traits;

pub use positions_model::{Position, PositionHolding};
pub use positions_traits::PositionRepositoryTrait;
