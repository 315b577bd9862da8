use std::sync::Arc;

use super::watchlist_model::{NewWatchlistItem, WatchlistEntry, WatchlistItem};
use super::watchlist_traits::{WatchlistRepositoryTrait, WatchlistServiceTrait};
use crate::errors::{DatabaseError, Result};
use crate::stocks::StockRepositoryTrait;
use crate::Error;

/// Service for managing per-user watchlists.
pub struct WatchlistService {
    repository: Arc<dyn WatchlistRepositoryTrait>,
    stocks: Arc<dyn StockRepositoryTrait>,
}

impl WatchlistService {
    pub fn new(
        repository: Arc<dyn WatchlistRepositoryTrait>,
        stocks: Arc<dyn StockRepositoryTrait>,
    ) -> Self {
        Self { repository, stocks }
    }
}

#[async_trait::async_trait]
impl WatchlistServiceTrait for WatchlistService {
    fn list_watchlist(&self, user_id: &str) -> Result<Vec<WatchlistEntry>> {
        self.repository.list_for_user(user_id)
    }

    async fn add_stock(&self, user_id: &str, stock_id: &str) -> Result<WatchlistItem> {
        // Unknown stocks surface as 404 rather than a foreign-key failure.
        let _ = self.stocks.get_by_id(stock_id)?;

        if let Some(existing) = self.repository.find(user_id, stock_id)? {
            return Ok(existing);
        }

        self.repository
            .add(NewWatchlistItem {
                user_id: user_id.to_string(),
                stock_id: stock_id.to_string(),
            })
            .await
    }

    async fn remove_item(&self, item_id: &str, user_id: &str, is_admin: bool) -> Result<()> {
        let item = self.repository.get_by_id(item_id)?.ok_or_else(|| {
            Error::Database(DatabaseError::NotFound(format!(
                "Watchlist item {item_id} not found"
            )))
        })?;

        if item.user_id != user_id && !is_admin {
            return Err(Error::Forbidden(
                "Watchlist item belongs to another user".to_string(),
            ));
        }

        self.repository.remove(item_id).await?;
        Ok(())
    }
}
