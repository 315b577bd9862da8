//! Watchlist domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::stocks::Stock;

/// One stock on a user's watchlist. At most one item exists per
/// (user, stock) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub id: String,
    pub user_id: String,
    pub stock_id: String,
    pub added_at: NaiveDateTime,
}

/// A watchlist item joined with its stock, as rendered on the watchlist page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    #[serde(flatten)]
    pub item: WatchlistItem,
    pub stock: Stock,
}

/// Input model for adding a stock to a watchlist.
#[derive(Debug, Clone)]
pub struct NewWatchlistItem {
    pub user_id: String,
    pub stock_id: String,
}
