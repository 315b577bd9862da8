//! Database model for positions.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use tradesim_core::positions::Position;

use crate::utils::parse_decimal;

/// Database model for positions. Decimal columns are stored as TEXT; the
/// average buy price keeps its full precision.
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::positions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PositionDB {
    pub id: String,
    pub user_id: String,
    pub stock_id: String,
    pub quantity: i64,
    pub average_buy_price: String,
    pub current_value: String,
    pub profit_loss: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<PositionDB> for Position {
    fn from(db: PositionDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            stock_id: db.stock_id,
            quantity: db.quantity,
            average_buy_price: parse_decimal(&db.average_buy_price, "positions.average_buy_price"),
            current_value: parse_decimal(&db.current_value, "positions.current_value"),
            profit_loss: parse_decimal(&db.profit_loss, "positions.profit_loss"),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
