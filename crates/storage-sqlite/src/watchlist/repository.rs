use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{stocks, watchlist_items};
use crate::stocks::StockDB;

use super::model::WatchlistItemDB;
use tradesim_core::errors::Result;
use tradesim_core::watchlist::{
    NewWatchlistItem, WatchlistEntry, WatchlistItem, WatchlistRepositoryTrait,
};

/// Repository for managing watchlist items in the database.
pub struct WatchlistRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl WatchlistRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl WatchlistRepositoryTrait for WatchlistRepository {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<WatchlistEntry>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = watchlist_items::table
            .inner_join(stocks::table)
            .filter(watchlist_items::user_id.eq(user_id))
            .select((WatchlistItemDB::as_select(), StockDB::as_select()))
            .order(watchlist_items::added_at.desc())
            .load::<(WatchlistItemDB, StockDB)>(&mut conn)
            .into_core()?;

        Ok(rows
            .into_iter()
            .map(|(item, stock)| WatchlistEntry {
                item: item.into(),
                stock: stock.into(),
            })
            .collect())
    }

    fn find(&self, user_id: &str, stock_id: &str) -> Result<Option<WatchlistItem>> {
        let mut conn = get_connection(&self.pool)?;

        let item = watchlist_items::table
            .filter(watchlist_items::user_id.eq(user_id))
            .filter(watchlist_items::stock_id.eq(stock_id))
            .select(WatchlistItemDB::as_select())
            .first::<WatchlistItemDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(item.map(WatchlistItem::from))
    }

    fn get_by_id(&self, item_id: &str) -> Result<Option<WatchlistItem>> {
        let mut conn = get_connection(&self.pool)?;

        let item = watchlist_items::table
            .find(item_id)
            .select(WatchlistItemDB::as_select())
            .first::<WatchlistItemDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(item.map(WatchlistItem::from))
    }

    async fn add(&self, new_item: NewWatchlistItem) -> Result<WatchlistItem> {
        self.writer
            .exec(move |conn| {
                let item_db: WatchlistItemDB = new_item.into();

                diesel::insert_into(watchlist_items::table)
                    .values(&item_db)
                    .execute(conn)
                    .into_core()?;

                Ok(item_db.into())
            })
            .await
    }

    async fn remove(&self, item_id: &str) -> Result<usize> {
        let id_owned = item_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected_rows = diesel::delete(watchlist_items::table.find(id_owned))
                    .execute(conn)
                    .into_core()?;
                Ok(affected_rows)
            })
            .await
    }
}
