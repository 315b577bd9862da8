use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::stocks;
use crate::schema::stocks::dsl::*;

use super::model::StockDB;
use tradesim_core::errors::Result;
use tradesim_core::stocks::{
    NewStock, Stock, StockRepositoryTrait, StockSearchResult, StockUpdate,
};

/// Repository for managing the stock catalog in the database.
pub struct StockRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl StockRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl StockRepositoryTrait for StockRepository {
    fn list(&self) -> Result<Vec<Stock>> {
        let mut conn = get_connection(&self.pool)?;

        let results = stocks
            .select(StockDB::as_select())
            .order(symbol.asc())
            .load::<StockDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Stock::from).collect())
    }

    fn get_by_id(&self, stock_id: &str) -> Result<Stock> {
        let mut conn = get_connection(&self.pool)?;

        let stock = stocks
            .select(StockDB::as_select())
            .find(stock_id)
            .first::<StockDB>(&mut conn)
            .into_core()?;

        Ok(stock.into())
    }

    fn search(&self, query: &str, limit: i64) -> Result<Vec<StockSearchResult>> {
        let mut conn = get_connection(&self.pool)?;

        // SQLite LIKE is case-insensitive for ASCII by default.
        let symbol_pattern = format!("{}%", query.to_uppercase());
        let name_pattern = format!("%{}%", query);

        let results = stocks
            .select(StockDB::as_select())
            .filter(symbol.like(symbol_pattern).or(name.like(name_pattern)))
            .order(symbol.asc())
            .limit(limit)
            .load::<StockDB>(&mut conn)
            .into_core()?;

        Ok(results
            .into_iter()
            .map(|db| StockSearchResult {
                id: db.id,
                symbol: db.symbol,
                name: db.name,
            })
            .collect())
    }

    async fn create(&self, new_stock: NewStock) -> Result<Stock> {
        self.writer
            .exec(move |conn| {
                let stock_db: StockDB = new_stock.into();

                diesel::insert_into(stocks::table)
                    .values(&stock_db)
                    .execute(conn)
                    .into_core()?;

                Ok(stock_db.into())
            })
            .await
    }

    async fn update(&self, stock_id: &str, update: StockUpdate) -> Result<Stock> {
        let id_owned = stock_id.to_string();
        self.writer
            .exec(move |conn| {
                let existing = stocks
                    .select(StockDB::as_select())
                    .find(&id_owned)
                    .first::<StockDB>(conn)
                    .into_core()?;

                let updated = StockDB {
                    id: existing.id.clone(),
                    symbol: update.symbol.trim().to_uppercase(),
                    name: update.name,
                    current_price: update.current_price.to_string(),
                    previous_close: update
                        .previous_close
                        .map(|p| p.to_string())
                        .unwrap_or(existing.previous_close),
                    open_price: update
                        .open_price
                        .map(|p| p.to_string())
                        .unwrap_or(existing.open_price),
                    high_price: update
                        .high_price
                        .map(|p| p.to_string())
                        .unwrap_or(existing.high_price),
                    low_price: update
                        .low_price
                        .map(|p| p.to_string())
                        .unwrap_or(existing.low_price),
                    volume: update.volume.unwrap_or(existing.volume),
                    market_cap: update
                        .market_cap
                        .map(|cap| cap.to_string())
                        .or(existing.market_cap),
                    description: update.description.unwrap_or(existing.description),
                    sector: update.sector.unwrap_or(existing.sector),
                    created_at: existing.created_at,
                    updated_at: chrono::Utc::now().naive_utc(),
                };

                diesel::update(stocks.find(&updated.id))
                    .set(&updated)
                    .execute(conn)
                    .into_core()?;

                Ok(updated.into())
            })
            .await
    }

    async fn delete(&self, stock_id: &str) -> Result<usize> {
        let id_owned = stock_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected_rows = diesel::delete(stocks.find(id_owned))
                    .execute(conn)
                    .into_core()?;
                Ok(affected_rows)
            })
            .await
    }
}
