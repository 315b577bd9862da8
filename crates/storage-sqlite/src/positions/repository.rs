use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::{positions, stocks};
use crate::stocks::StockDB;

use super::model::PositionDB;
use tradesim_core::errors::Result;
use tradesim_core::positions::{PositionHolding, PositionRepositoryTrait};

/// Repository for position reads.
///
/// All position writes happen inside the trade executor's transaction;
/// this repository only serves the read side (portfolio views).
pub struct PositionRepository {
    pool: Arc<DbPool>,
}

impl PositionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl PositionRepositoryTrait for PositionRepository {
    fn list_holdings(&self, user_id: &str) -> Result<Vec<PositionHolding>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = positions::table
            .inner_join(stocks::table)
            .filter(positions::user_id.eq(user_id))
            .select((PositionDB::as_select(), StockDB::as_select()))
            .order(stocks::symbol.asc())
            .load::<(PositionDB, StockDB)>(&mut conn)
            .into_core()?;

        Ok(rows
            .into_iter()
            .map(|(position, stock)| PositionHolding {
                position: position.into(),
                stock: stock.into(),
            })
            .collect())
    }
}
