use async_trait::async_trait;

use crate::errors::Result;
use crate::watchlist::watchlist_model::{NewWatchlistItem, WatchlistEntry, WatchlistItem};

/// Trait for watchlist repository operations.
#[async_trait]
pub trait WatchlistRepositoryTrait: Send + Sync {
    /// Lists a user's watchlist items joined with their stocks, newest first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<WatchlistEntry>>;

    /// Looks up the item for one (user, stock) pair, if any.
    fn find(&self, user_id: &str, stock_id: &str) -> Result<Option<WatchlistItem>>;

    /// Retrieves an item by its ID, if it exists.
    fn get_by_id(&self, item_id: &str) -> Result<Option<WatchlistItem>>;

    async fn add(&self, new_item: NewWatchlistItem) -> Result<WatchlistItem>;
    async fn remove(&self, item_id: &str) -> Result<usize>;
}

/// Trait for watchlist service operations.
#[async_trait]
pub trait WatchlistServiceTrait: Send + Sync {
    fn list_watchlist(&self, user_id: &str) -> Result<Vec<WatchlistEntry>>;

    /// Adds a stock to the user's watchlist; adding an already-watched stock
    /// returns the existing item unchanged.
    async fn add_stock(&self, user_id: &str, stock_id: &str) -> Result<WatchlistItem>;

    /// Removes an item. Only the owner (or an admin) may remove it.
    async fn remove_item(&self, item_id: &str, user_id: &str, is_admin: bool) -> Result<()>;
}
