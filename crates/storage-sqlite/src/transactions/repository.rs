use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::{stocks, transactions};
use crate::stocks::StockDB;

use super::model::TransactionDB;
use tradesim_core::errors::Result;
use tradesim_core::transactions::{
    TransactionEntry, TransactionPage, TransactionRepositoryTrait,
};

/// Repository for transaction ledger reads.
///
/// Appends happen inside the trade executor's transaction; nothing ever
/// updates or deletes a ledger row.
pub struct TransactionRepository {
    pool: Arc<DbPool>,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    fn load_entries(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<TransactionEntry>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = transactions::table
            .inner_join(stocks::table)
            .filter(transactions::user_id.eq(user_id))
            .select((TransactionDB::as_select(), StockDB::as_select()))
            .order(transactions::timestamp.desc())
            .offset(offset)
            .limit(limit)
            .load::<(TransactionDB, StockDB)>(&mut conn)
            .into_core()?;

        Ok(rows
            .into_iter()
            .map(|(transaction, stock)| TransactionEntry {
                transaction: transaction.into(),
                stock: stock.into(),
            })
            .collect())
    }
}

impl TransactionRepositoryTrait for TransactionRepository {
    fn list_by_user(&self, user_id: &str, page: i64, limit: i64) -> Result<TransactionPage> {
        let total = {
            let mut conn = get_connection(&self.pool)?;
            transactions::table
                .filter(transactions::user_id.eq(user_id))
                .count()
                .get_result::<i64>(&mut conn)
                .into_core()?
        };

        let page = page.max(0);
        let limit = limit.max(1);
        let entries = self.load_entries(user_id, page * limit, limit)?;

        Ok(TransactionPage {
            transactions: entries,
            total,
            page,
            limit,
            total_pages: (total + limit - 1) / limit,
        })
    }

    fn recent_for_user(&self, user_id: &str, limit: i64) -> Result<Vec<TransactionEntry>> {
        self.load_entries(user_id, 0, limit)
    }
}
