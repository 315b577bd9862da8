//! Stock catalog domain models.
//!
//! A stock's `current_price` is an administratively maintained number, not a
//! live feed; the trade engine treats it as a point-in-time price oracle.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SECTOR;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a stock in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: Decimal,
    pub previous_close: Decimal,
    pub open_price: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
    pub volume: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<Decimal>,
    pub description: String,
    pub sector: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new stock (admin only).
///
/// Day-price fields default to `current_price` when omitted, matching how
/// freshly listed synthetic stocks start their first session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub symbol: String,
    pub name: String,
    pub current_price: Decimal,
    pub previous_close: Option<Decimal>,
    pub open_price: Option<Decimal>,
    pub high_price: Option<Decimal>,
    pub low_price: Option<Decimal>,
    pub volume: Option<i64>,
    pub market_cap: Option<Decimal>,
    pub description: Option<String>,
    pub sector: Option<String>,
}

impl NewStock {
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "symbol".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.current_price <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "currentPrice must be positive".to_string(),
            )));
        }
        Ok(())
    }

    pub fn sector_or_default(&self) -> String {
        self.sector
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_SECTOR)
            .to_string()
    }
}

/// Input model for updating an existing stock (admin only).
///
/// Omitted optional fields leave the stored value untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdate {
    pub symbol: String,
    pub name: String,
    pub current_price: Decimal,
    pub previous_close: Option<Decimal>,
    pub open_price: Option<Decimal>,
    pub high_price: Option<Decimal>,
    pub low_price: Option<Decimal>,
    pub volume: Option<i64>,
    pub market_cap: Option<Decimal>,
    pub description: Option<String>,
    pub sector: Option<String>,
}

impl StockUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "symbol".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.current_price <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "currentPrice must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// Slim projection returned by the symbol/name search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockSearchResult {
    pub id: String,
    pub symbol: String,
    pub name: String,
}
