use async_trait::async_trait;

use crate::errors::Result;
use crate::stocks::stocks_model::{NewStock, Stock, StockSearchResult, StockUpdate};

/// Trait for stock catalog repository operations.
#[async_trait]
pub trait StockRepositoryTrait: Send + Sync {
    /// Lists all stocks ordered by symbol.
    fn list(&self) -> Result<Vec<Stock>>;

    /// Retrieves a stock by its ID.
    fn get_by_id(&self, stock_id: &str) -> Result<Stock>;

    /// Searches stocks by symbol prefix or name substring, case-insensitively.
    fn search(&self, query: &str, limit: i64) -> Result<Vec<StockSearchResult>>;

    async fn create(&self, new_stock: NewStock) -> Result<Stock>;
    async fn update(&self, stock_id: &str, update: StockUpdate) -> Result<Stock>;
    async fn delete(&self, stock_id: &str) -> Result<usize>;
}

/// Trait for stock catalog service operations.
#[async_trait]
pub trait StockServiceTrait: Send + Sync {
    fn list_stocks(&self) -> Result<Vec<Stock>>;
    fn get_stock(&self, stock_id: &str) -> Result<Stock>;
    fn search_stocks(&self, query: &str) -> Result<Vec<StockSearchResult>>;
    async fn create_stock(&self, new_stock: NewStock) -> Result<Stock>;
    async fn update_stock(&self, stock_id: &str, update: StockUpdate) -> Result<Stock>;
    async fn delete_stock(&self, stock_id: &str) -> Result<()>;
}
