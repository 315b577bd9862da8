//! Database model for the transaction ledger.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use tradesim_core::transactions::{NewTransaction, TradeSide, Transaction};

use crate::utils::parse_decimal;

/// Database model for ledger rows. Append-only: there is no changeset
/// derive because rows are never updated.
#[derive(Queryable, Identifiable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: String,
    pub user_id: String,
    pub stock_id: String,
    pub side: String,
    pub quantity: i64,
    pub price: String,
    pub total_amount: String,
    pub timestamp: NaiveDateTime,
}

impl From<TransactionDB> for Transaction {
    fn from(db: TransactionDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            stock_id: db.stock_id,
            side: db.side.parse().unwrap_or(TradeSide::Buy),
            quantity: db.quantity,
            price: parse_decimal(&db.price, "transactions.price"),
            total_amount: parse_decimal(&db.total_amount, "transactions.total_amount"),
            timestamp: db.timestamp,
        }
    }
}

impl From<NewTransaction> for TransactionDB {
    fn from(domain: NewTransaction) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: domain.user_id,
            stock_id: domain.stock_id,
            side: domain.side.as_str().to_string(),
            quantity: domain.quantity,
            price: domain.price.to_string(),
            total_amount: domain.total_amount.to_string(),
            timestamp: chrono::Utc::now().naive_utc(),
        }
    }
}
