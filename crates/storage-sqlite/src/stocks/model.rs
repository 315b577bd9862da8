//! Database model for stocks.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use tradesim_core::stocks::{NewStock, Stock};

use crate::utils::parse_decimal;

/// Database model for stocks. Decimal columns are stored as TEXT.
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::stocks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StockDB {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: String,
    pub previous_close: String,
    pub open_price: String,
    pub high_price: String,
    pub low_price: String,
    pub volume: i64,
    pub market_cap: Option<String>,
    pub description: String,
    pub sector: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<StockDB> for Stock {
    fn from(db: StockDB) -> Self {
        Self {
            id: db.id,
            symbol: db.symbol,
            name: db.name,
            current_price: parse_decimal(&db.current_price, "stocks.current_price"),
            previous_close: parse_decimal(&db.previous_close, "stocks.previous_close"),
            open_price: parse_decimal(&db.open_price, "stocks.open_price"),
            high_price: parse_decimal(&db.high_price, "stocks.high_price"),
            low_price: parse_decimal(&db.low_price, "stocks.low_price"),
            volume: db.volume,
            market_cap: db
                .market_cap
                .map(|cap| parse_decimal(&cap, "stocks.market_cap")),
            description: db.description,
            sector: db.sector,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewStock> for StockDB {
    fn from(domain: NewStock) -> Self {
        let now = chrono::Utc::now().naive_utc();
        // Day prices default to the current price for a freshly listed stock.
        let current = domain.current_price;
        let sector = domain.sector_or_default();
        Self {
            id: domain
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            symbol: domain.symbol.trim().to_uppercase(),
            name: domain.name,
            current_price: current.to_string(),
            previous_close: domain.previous_close.unwrap_or(current).to_string(),
            open_price: domain.open_price.unwrap_or(current).to_string(),
            high_price: domain.high_price.unwrap_or(current).to_string(),
            low_price: domain.low_price.unwrap_or(current).to_string(),
            volume: domain.volume.unwrap_or(0),
            market_cap: domain.market_cap.map(|cap| cap.to_string()),
            description: domain.description.unwrap_or_default(),
            sector,
            created_at: now,
            updated_at: now,
        }
    }
}
