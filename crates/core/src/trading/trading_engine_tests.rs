use rust_decimal_macros::dec;

use super::engine::{
    apply_buy, apply_sell, debit, open_position, portfolio_value, total_profit, trade_amount,
    PositionFigures, SellOutcome,
};
use super::trading_errors::TradingError;

#[test]
fn trade_amount_rounds_to_cents() {
    assert_eq!(trade_amount(dec!(175.50), 10), dec!(1755.00));
    assert_eq!(trade_amount(dec!(0.333), 3), dec!(1.00));
    // Midpoint rounds away from zero, like Number.toFixed(2).
    assert_eq!(trade_amount(dec!(0.005), 1), dec!(0.01));
}

#[test]
fn debit_rejects_insufficient_funds() {
    assert_eq!(debit(dec!(100), dec!(40)).unwrap(), dec!(60));
    let err = debit(dec!(100), dec!(100.01)).unwrap_err();
    assert_eq!(
        err,
        TradingError::InsufficientFunds {
            required: dec!(100.01),
            available: dec!(100),
        }
    );
}

#[test]
fn first_buy_opens_position_at_cost() {
    let figures = open_position(10, dec!(175.50));
    assert_eq!(figures.quantity, 10);
    assert_eq!(figures.average_buy_price, dec!(175.50));
    assert_eq!(figures.current_value, dec!(1755.00));
    assert_eq!(figures.profit_loss, dec!(0));
}

#[test]
fn buy_averages_cost_basis() {
    // BUY 10 @ $100 then BUY 10 @ $200 => qty 20, avg 150.00
    let first = open_position(10, dec!(100));
    let second = apply_buy(&first, 10, dec!(200), dec!(200));
    assert_eq!(second.quantity, 20);
    assert_eq!(second.average_buy_price, dec!(150));
    assert_eq!(second.current_value, dec!(3000));
    // 20 * 200 - 20 * 150
    assert_eq!(second.profit_loss, dec!(1000));
}

#[test]
fn partial_sell_preserves_cost_basis() {
    let held = PositionFigures {
        quantity: 20,
        average_buy_price: dec!(150),
        current_value: dec!(3000),
        profit_loss: dec!(0),
    };
    match apply_sell(&held, 5, dec!(180)).unwrap() {
        SellOutcome::Reduced(figures) => {
            assert_eq!(figures.quantity, 15);
            assert_eq!(figures.average_buy_price, dec!(150));
            assert_eq!(figures.current_value, dec!(2250.00));
            // 15 * (180 - 150)
            assert_eq!(figures.profit_loss, dec!(450));
        }
        other => panic!("expected Reduced, got {other:?}"),
    }
}

#[test]
fn full_sell_closes_position() {
    let held = PositionFigures {
        quantity: 15,
        average_buy_price: dec!(150),
        current_value: dec!(2250),
        profit_loss: dec!(0),
    };
    assert_eq!(apply_sell(&held, 15, dec!(1)).unwrap(), SellOutcome::Closed);
}

#[test]
fn oversell_is_rejected() {
    let held = PositionFigures {
        quantity: 6,
        average_buy_price: dec!(175.50),
        current_value: dec!(1053),
        profit_loss: dec!(0),
    };
    let err = apply_sell(&held, 7, dec!(180)).unwrap_err();
    assert_eq!(
        err,
        TradingError::InsufficientShares {
            requested: 7,
            held: 6,
        }
    );
}

#[test]
fn aggregates_sum_over_positions() {
    let value = portfolio_value(vec![(10, dec!(175.50)), (2, dec!(325.20))]);
    assert_eq!(value, dec!(2405.40));
    assert_eq!(portfolio_value(Vec::<(i64, _)>::new()), dec!(0));

    assert_eq!(total_profit(vec![dec!(45), dec!(-12.50)]), dec!(32.50));
}

#[test]
fn buy_then_partial_sell_walkthrough() {
    // Balance 10000.00; BUY 10 AAPL @ 175.50; SELL 4 @ 180.00.
    let balance = dec!(10000.00);
    let cost = trade_amount(dec!(175.50), 10);
    let balance = debit(balance, cost).unwrap();
    assert_eq!(balance, dec!(8245.00));

    let position = open_position(10, dec!(175.50));
    assert_eq!(position.quantity, 10);
    assert_eq!(position.average_buy_price, dec!(175.50));

    let proceeds = trade_amount(dec!(180.00), 4);
    let balance = balance + proceeds;
    assert_eq!(balance, dec!(8965.00));

    match apply_sell(&position, 4, dec!(175.50)).unwrap() {
        SellOutcome::Reduced(figures) => {
            assert_eq!(figures.quantity, 6);
            assert_eq!(figures.average_buy_price, dec!(175.50));
            assert_eq!(figures.current_value, dec!(1053.00));
        }
        other => panic!("expected Reduced, got {other:?}"),
    }
}
