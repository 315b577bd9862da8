//! Database model for watchlist items.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use uuid::Uuid;

use tradesim_core::watchlist::{NewWatchlistItem, WatchlistItem};

#[derive(Queryable, Identifiable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::watchlist_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WatchlistItemDB {
    pub id: String,
    pub user_id: String,
    pub stock_id: String,
    pub added_at: NaiveDateTime,
}

impl From<WatchlistItemDB> for WatchlistItem {
    fn from(db: WatchlistItemDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            stock_id: db.stock_id,
            added_at: db.added_at,
        }
    }
}

impl From<NewWatchlistItem> for WatchlistItemDB {
    fn from(new_item: NewWatchlistItem) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: new_item.user_id,
            stock_id: new_item.stock_id,
            added_at: chrono::Utc::now().naive_utc(),
        }
    }
}
