use rust_decimal_macros::dec;

use crate::errors::{Error, ValidationError};
use crate::stocks::{NewStock, StockUpdate};

fn sample_new_stock() -> NewStock {
    NewStock {
        id: None,
        symbol: "AAPL".to_string(),
        name: "Apple Inc.".to_string(),
        current_price: dec!(175.50),
        previous_close: None,
        open_price: None,
        high_price: None,
        low_price: None,
        volume: None,
        market_cap: None,
        description: None,
        sector: None,
    }
}

#[test]
fn new_stock_valid() {
    assert!(sample_new_stock().validate().is_ok());
}

#[test]
fn new_stock_rejects_blank_symbol() {
    let mut stock = sample_new_stock();
    stock.symbol = "  ".to_string();
    assert!(matches!(
        stock.validate(),
        Err(Error::Validation(ValidationError::MissingField(_)))
    ));
}

#[test]
fn new_stock_rejects_non_positive_price() {
    let mut stock = sample_new_stock();
    stock.current_price = dec!(0);
    assert!(matches!(
        stock.validate(),
        Err(Error::Validation(ValidationError::InvalidInput(_)))
    ));
}

#[test]
fn new_stock_sector_defaults() {
    let stock = sample_new_stock();
    assert_eq!(stock.sector_or_default(), "Uncategorized");

    let mut with_sector = sample_new_stock();
    with_sector.sector = Some("Technology".to_string());
    assert_eq!(with_sector.sector_or_default(), "Technology");
}

#[test]
fn stock_update_rejects_negative_price() {
    let update = StockUpdate {
        symbol: "AAPL".to_string(),
        name: "Apple Inc.".to_string(),
        current_price: dec!(-1),
        previous_close: None,
        open_price: None,
        high_price: None,
        low_price: None,
        volume: None,
        market_cap: None,
        description: None,
        sector: None,
    };
    assert!(update.validate().is_err());
}
