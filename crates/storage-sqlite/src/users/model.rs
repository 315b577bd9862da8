//! Database model for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use tradesim_core::constants::starting_balance;
use tradesim_core::users::{NewUser, User, UserRole};

use crate::utils::parse_decimal;

/// Database model for users. Decimal columns are stored as TEXT.
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub balance: String,
    pub portfolio_value: String,
    pub total_profit: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            role: db.role.parse().unwrap_or_default(),
            balance: parse_decimal(&db.balance, "users.balance"),
            portfolio_value: parse_decimal(&db.portfolio_value, "users.portfolio_value"),
            total_profit: parse_decimal(&db.total_profit, "users.total_profit"),
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewUser> for UserDB {
    fn from(domain: NewUser) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: domain.name,
            email: domain.email.trim().to_lowercase(),
            password_hash: domain.password_hash,
            role: domain.role.as_str().to_string(),
            balance: starting_balance().to_string(),
            portfolio_value: "0".to_string(),
            total_profit: "0".to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
