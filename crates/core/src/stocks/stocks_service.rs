use log::debug;
use std::sync::Arc;

use super::stocks_model::{NewStock, Stock, StockSearchResult, StockUpdate};
use super::stocks_traits::{StockRepositoryTrait, StockServiceTrait};
use crate::constants::{MIN_SEARCH_QUERY_LEN, SEARCH_RESULT_LIMIT};
use crate::errors::{Result, ValidationError};
use crate::Error;

/// Service for managing the stock catalog.
pub struct StockService {
    repository: Arc<dyn StockRepositoryTrait>,
}

impl StockService {
    pub fn new(repository: Arc<dyn StockRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl StockServiceTrait for StockService {
    fn list_stocks(&self) -> Result<Vec<Stock>> {
        self.repository.list()
    }

    fn get_stock(&self, stock_id: &str) -> Result<Stock> {
        self.repository.get_by_id(stock_id)
    }

    fn search_stocks(&self, query: &str) -> Result<Vec<StockSearchResult>> {
        let trimmed = query.trim();
        if trimmed.len() < MIN_SEARCH_QUERY_LEN {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Query must be at least {MIN_SEARCH_QUERY_LEN} characters"
            ))));
        }
        self.repository.search(trimmed, SEARCH_RESULT_LIMIT)
    }

    async fn create_stock(&self, new_stock: NewStock) -> Result<Stock> {
        new_stock.validate()?;
        debug!("Creating stock {}", new_stock.symbol);
        self.repository.create(new_stock).await
    }

    async fn update_stock(&self, stock_id: &str, update: StockUpdate) -> Result<Stock> {
        update.validate()?;
        self.repository.update(stock_id, update).await
    }

    async fn delete_stock(&self, stock_id: &str) -> Result<()> {
        // Surface a 404-style error for unknown IDs before attempting the delete.
        let _ = self.repository.get_by_id(stock_id)?;
        self.repository.delete(stock_id).await?;
        Ok(())
    }
}
