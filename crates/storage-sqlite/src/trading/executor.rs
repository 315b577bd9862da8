//! Transactional trade executor.
//!
//! Runs the full buy/sell sequence - balance mutation, position upsert or
//! deletion, ledger append, and aggregate recomputation - as one job on the
//! writer actor, so the whole trade commits or rolls back atomically and
//! concurrent trades are serialized.

use async_trait::async_trait;
use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::db::WriteHandle;
use crate::errors::IntoCore;
use crate::positions::PositionDB;
use crate::schema::{positions, stocks, transactions, users};
use crate::stocks::StockDB;
use crate::transactions::TransactionDB;
use crate::users::UserDB;
use crate::utils::parse_decimal;

use tradesim_core::errors::Result;
use tradesim_core::trading::engine::{self, PositionFigures, SellOutcome};
use tradesim_core::trading::{TradeExecution, TradeExecutorTrait, TradeRequest, TradingError};
use tradesim_core::transactions::{NewTransaction, TradeSide};
use tradesim_core::users::AccountSummary;

/// All of the executor's reads and writes run on the writer connection, so
/// it holds only the write handle.
pub struct TradeExecutor {
    writer: WriteHandle,
}

impl TradeExecutor {
    pub fn new(writer: WriteHandle) -> Self {
        Self { writer }
    }
}

#[async_trait]
impl TradeExecutorTrait for TradeExecutor {
    async fn execute(&self, request: TradeRequest) -> Result<TradeExecution> {
        self.writer
            .exec(move |conn| execute_trade(conn, request))
            .await
    }
}

fn execute_trade(conn: &mut SqliteConnection, request: TradeRequest) -> Result<TradeExecution> {
    let user = users::table
        .find(&request.user_id)
        .select(UserDB::as_select())
        .first::<UserDB>(conn)
        .optional()
        .into_core()?
        .ok_or(TradingError::AccountNotFound(request.user_id.clone()))?;

    let stock = stocks::table
        .find(&request.stock_id)
        .select(StockDB::as_select())
        .first::<StockDB>(conn)
        .optional()
        .into_core()?
        .ok_or(TradingError::StockNotFound(request.stock_id.clone()))?;

    let market_price = parse_decimal(&stock.current_price, "stocks.current_price");
    let amount = engine::trade_amount(request.price, request.quantity);
    let balance = parse_decimal(&user.balance, "users.balance");

    let position = positions::table
        .filter(positions::user_id.eq(&request.user_id))
        .filter(positions::stock_id.eq(&request.stock_id))
        .select(PositionDB::as_select())
        .first::<PositionDB>(conn)
        .optional()
        .into_core()?;

    let new_balance = match request.side {
        TradeSide::Buy => {
            let new_balance = engine::debit(balance, amount)?;
            match position {
                Some(existing) => {
                    let figures = engine::apply_buy(
                        &figures_of(&existing),
                        request.quantity,
                        request.price,
                        market_price,
                    );
                    update_position(conn, &existing, figures)?;
                }
                None => {
                    let figures = engine::open_position(request.quantity, request.price);
                    insert_position(conn, &request, figures)?;
                }
            }
            new_balance
        }
        TradeSide::Sell => {
            let existing = position.ok_or(TradingError::PositionNotFound {
                stock_id: request.stock_id.clone(),
            })?;
            match engine::apply_sell(&figures_of(&existing), request.quantity, market_price)? {
                SellOutcome::Closed => {
                    diesel::delete(positions::table.find(&existing.id))
                        .execute(conn)
                        .into_core()?;
                }
                SellOutcome::Reduced(figures) => {
                    update_position(conn, &existing, figures)?;
                }
            }
            balance + amount
        }
    };

    let transaction_db: TransactionDB = NewTransaction {
        user_id: request.user_id.clone(),
        stock_id: request.stock_id.clone(),
        side: request.side,
        quantity: request.quantity,
        price: request.price,
        total_amount: amount,
    }
    .into();

    diesel::insert_into(transactions::table)
        .values(&transaction_db)
        .execute(conn)
        .into_core()?;

    let account = recompute_aggregates(conn, &user.id, new_balance)?;

    Ok(TradeExecution {
        transaction: transaction_db.into(),
        account,
    })
}

fn figures_of(db: &PositionDB) -> PositionFigures {
    PositionFigures {
        quantity: db.quantity,
        average_buy_price: parse_decimal(&db.average_buy_price, "positions.average_buy_price"),
        current_value: parse_decimal(&db.current_value, "positions.current_value"),
        profit_loss: parse_decimal(&db.profit_loss, "positions.profit_loss"),
    }
}

fn insert_position(
    conn: &mut SqliteConnection,
    request: &TradeRequest,
    figures: PositionFigures,
) -> Result<()> {
    let now = chrono::Utc::now().naive_utc();
    let position_db = PositionDB {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: request.user_id.clone(),
        stock_id: request.stock_id.clone(),
        quantity: figures.quantity,
        average_buy_price: figures.average_buy_price.to_string(),
        current_value: figures.current_value.to_string(),
        profit_loss: figures.profit_loss.to_string(),
        created_at: now,
        updated_at: now,
    };

    diesel::insert_into(positions::table)
        .values(&position_db)
        .execute(conn)
        .into_core()?;
    Ok(())
}

fn update_position(
    conn: &mut SqliteConnection,
    existing: &PositionDB,
    figures: PositionFigures,
) -> Result<()> {
    diesel::update(positions::table.find(&existing.id))
        .set((
            positions::quantity.eq(figures.quantity),
            positions::average_buy_price.eq(figures.average_buy_price.to_string()),
            positions::current_value.eq(figures.current_value.to_string()),
            positions::profit_loss.eq(figures.profit_loss.to_string()),
            positions::updated_at.eq(chrono::Utc::now().naive_utc()),
        ))
        .execute(conn)
        .into_core()?;
    Ok(())
}

/// Recomputes the user's portfolio value and total profit by summing over
/// every remaining position, then persists them with the new balance.
fn recompute_aggregates(
    conn: &mut SqliteConnection,
    user_id: &str,
    new_balance: Decimal,
) -> Result<AccountSummary> {
    let holdings = positions::table
        .inner_join(stocks::table)
        .filter(positions::user_id.eq(user_id))
        .select((PositionDB::as_select(), StockDB::as_select()))
        .load::<(PositionDB, StockDB)>(conn)
        .into_core()?;

    let portfolio_value = engine::portfolio_value(holdings.iter().map(|(position, stock)| {
        (
            position.quantity,
            parse_decimal(&stock.current_price, "stocks.current_price"),
        )
    }));
    let total_profit = engine::total_profit(
        holdings
            .iter()
            .map(|(position, _)| parse_decimal(&position.profit_loss, "positions.profit_loss")),
    );

    diesel::update(users::table.find(user_id))
        .set((
            users::balance.eq(new_balance.to_string()),
            users::portfolio_value.eq(portfolio_value.to_string()),
            users::total_profit.eq(total_profit.to_string()),
            users::updated_at.eq(chrono::Utc::now().naive_utc()),
        ))
        .execute(conn)
        .into_core()?;

    Ok(AccountSummary {
        balance: new_balance,
        portfolio_value,
        total_profit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, get_connection, run_migrations, write_actor::spawn_writer, DbPool};
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use tempfile::tempdir;
    use tradesim_core::stocks::NewStock;
    use tradesim_core::users::{NewUser, UserRole};
    use tradesim_core::Error;

    async fn create_test_executor() -> (TradeExecutor, Arc<DbPool>, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");

        let writer = spawn_writer((*pool).clone());
        let executor = TradeExecutor::new(writer);
        (executor, pool, temp_dir)
    }

    /// Inserts a user with the default starting balance and returns their ID.
    fn seed_user(pool: &Arc<DbPool>) -> String {
        let user_db: UserDB = NewUser {
            name: "Test User".to_string(),
            email: format!("{}@example.com", uuid::Uuid::new_v4()),
            password_hash: "hash".to_string(),
            role: UserRole::User,
        }
        .into();

        let mut conn = get_connection(pool).expect("Failed to get connection");
        diesel::insert_into(users::table)
            .values(&user_db)
            .execute(&mut conn)
            .expect("Failed to seed user");
        user_db.id
    }

    /// Inserts a stock priced at `price` and returns its ID.
    fn seed_stock(pool: &Arc<DbPool>, symbol: &str, price: Decimal) -> String {
        let stock_db: StockDB = NewStock {
            id: None,
            symbol: symbol.to_string(),
            name: format!("{} Inc.", symbol),
            current_price: price,
            previous_close: None,
            open_price: None,
            high_price: None,
            low_price: None,
            volume: None,
            market_cap: None,
            description: None,
            sector: None,
        }
        .into();

        let mut conn = get_connection(pool).expect("Failed to get connection");
        diesel::insert_into(stocks::table)
            .values(&stock_db)
            .execute(&mut conn)
            .expect("Failed to seed stock");
        stock_db.id
    }

    fn buy(user_id: &str, stock_id: &str, quantity: i64, price: Decimal) -> TradeRequest {
        TradeRequest {
            user_id: user_id.to_string(),
            stock_id: stock_id.to_string(),
            side: TradeSide::Buy,
            quantity,
            price,
        }
    }

    fn sell(user_id: &str, stock_id: &str, quantity: i64, price: Decimal) -> TradeRequest {
        TradeRequest {
            user_id: user_id.to_string(),
            stock_id: stock_id.to_string(),
            side: TradeSide::Sell,
            quantity,
            price,
        }
    }

    fn load_position(pool: &Arc<DbPool>, user_id: &str, stock_id: &str) -> Option<PositionDB> {
        let mut conn = get_connection(pool).expect("Failed to get connection");
        positions::table
            .filter(positions::user_id.eq(user_id))
            .filter(positions::stock_id.eq(stock_id))
            .select(PositionDB::as_select())
            .first::<PositionDB>(&mut conn)
            .optional()
            .expect("Failed to load position")
    }

    fn ledger_count(pool: &Arc<DbPool>, user_id: &str) -> i64 {
        let mut conn = get_connection(pool).expect("Failed to get connection");
        transactions::table
            .filter(transactions::user_id.eq(user_id))
            .count()
            .get_result(&mut conn)
            .expect("Failed to count transactions")
    }

    #[tokio::test]
    async fn test_buy_debits_balance_and_opens_position() {
        let (executor, pool, _dir) = create_test_executor().await;
        let user_id = seed_user(&pool);
        let stock_id = seed_stock(&pool, "AAPL", dec!(175.50));

        let execution = executor
            .execute(buy(&user_id, &stock_id, 10, dec!(175.50)))
            .await
            .expect("Buy should succeed");

        assert_eq!(execution.account.balance, dec!(8245.00));
        assert_eq!(execution.account.portfolio_value, dec!(1755.00));
        assert_eq!(execution.transaction.total_amount, dec!(1755.00));
        assert_eq!(execution.transaction.side, TradeSide::Buy);

        let position = load_position(&pool, &user_id, &stock_id).expect("Position should exist");
        assert_eq!(position.quantity, 10);
        assert_eq!(parse_decimal(&position.average_buy_price, "avg"), dec!(175.50));
        assert_eq!(ledger_count(&pool, &user_id), 1);
    }

    #[tokio::test]
    async fn test_buy_averages_cost_basis() {
        let (executor, pool, _dir) = create_test_executor().await;
        let user_id = seed_user(&pool);
        let stock_id = seed_stock(&pool, "MSFT", dec!(150));

        executor
            .execute(buy(&user_id, &stock_id, 10, dec!(100)))
            .await
            .expect("First buy should succeed");
        executor
            .execute(buy(&user_id, &stock_id, 10, dec!(200)))
            .await
            .expect("Second buy should succeed");

        let position = load_position(&pool, &user_id, &stock_id).expect("Position should exist");
        assert_eq!(position.quantity, 20);
        assert_eq!(parse_decimal(&position.average_buy_price, "avg"), dec!(150));
        assert_eq!(parse_decimal(&position.current_value, "value"), dec!(3000));
    }

    #[tokio::test]
    async fn test_partial_sell_keeps_cost_basis() {
        let (executor, pool, _dir) = create_test_executor().await;
        let user_id = seed_user(&pool);
        let stock_id = seed_stock(&pool, "AAPL", dec!(175.50));

        executor
            .execute(buy(&user_id, &stock_id, 10, dec!(175.50)))
            .await
            .expect("Buy should succeed");
        let execution = executor
            .execute(sell(&user_id, &stock_id, 4, dec!(180)))
            .await
            .expect("Sell should succeed");

        // 10000 - 1755 + 720
        assert_eq!(execution.account.balance, dec!(8965.00));

        let position = load_position(&pool, &user_id, &stock_id).expect("Position should remain");
        assert_eq!(position.quantity, 6);
        assert_eq!(parse_decimal(&position.average_buy_price, "avg"), dec!(175.50));
        assert_eq!(parse_decimal(&position.current_value, "value"), dec!(1053.00));
        assert_eq!(ledger_count(&pool, &user_id), 2);
    }

    #[tokio::test]
    async fn test_full_sell_deletes_position() {
        let (executor, pool, _dir) = create_test_executor().await;
        let user_id = seed_user(&pool);
        let stock_id = seed_stock(&pool, "NVDA", dec!(500));

        executor
            .execute(buy(&user_id, &stock_id, 5, dec!(500)))
            .await
            .expect("Buy should succeed");
        let execution = executor
            .execute(sell(&user_id, &stock_id, 5, dec!(500)))
            .await
            .expect("Sell should succeed");

        assert_eq!(execution.account.balance, dec!(10000.00));
        assert_eq!(execution.account.portfolio_value, Decimal::ZERO);
        assert!(load_position(&pool, &user_id, &stock_id).is_none());
        assert_eq!(ledger_count(&pool, &user_id), 2);
    }

    #[tokio::test]
    async fn test_insufficient_funds_rolls_back() {
        let (executor, pool, _dir) = create_test_executor().await;
        let user_id = seed_user(&pool);
        let stock_id = seed_stock(&pool, "AAPL", dec!(175.50));

        let result = executor
            .execute(buy(&user_id, &stock_id, 1000, dec!(175.50)))
            .await;

        assert!(matches!(
            result,
            Err(Error::Trading(TradingError::InsufficientFunds { .. }))
        ));
        assert!(load_position(&pool, &user_id, &stock_id).is_none());
        assert_eq!(ledger_count(&pool, &user_id), 0);

        let mut conn = get_connection(&pool).expect("Failed to get connection");
        let user = users::table
            .find(&user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .expect("User should exist");
        assert_eq!(parse_decimal(&user.balance, "balance"), dec!(10000.00));
    }

    #[tokio::test]
    async fn test_oversell_rejected() {
        let (executor, pool, _dir) = create_test_executor().await;
        let user_id = seed_user(&pool);
        let stock_id = seed_stock(&pool, "AAPL", dec!(100));

        executor
            .execute(buy(&user_id, &stock_id, 5, dec!(100)))
            .await
            .expect("Buy should succeed");
        let result = executor.execute(sell(&user_id, &stock_id, 10, dec!(100))).await;

        assert!(matches!(
            result,
            Err(Error::Trading(TradingError::InsufficientShares {
                requested: 10,
                held: 5,
            }))
        ));
        let position = load_position(&pool, &user_id, &stock_id).expect("Position unchanged");
        assert_eq!(position.quantity, 5);
    }

    #[tokio::test]
    async fn test_concurrent_buys_serialize_on_one_position() {
        let (executor, pool, _dir) = create_test_executor().await;
        let user_id = seed_user(&pool);
        let stock_id = seed_stock(&pool, "AAPL", dec!(10));

        // Five buys in flight at once; the writer must apply them one at a
        // time so no update reads a stale position.
        let (a, b, c, d, e) = tokio::join!(
            executor.execute(buy(&user_id, &stock_id, 10, dec!(10))),
            executor.execute(buy(&user_id, &stock_id, 10, dec!(10))),
            executor.execute(buy(&user_id, &stock_id, 10, dec!(10))),
            executor.execute(buy(&user_id, &stock_id, 10, dec!(10))),
            executor.execute(buy(&user_id, &stock_id, 10, dec!(10))),
        );
        for result in [a, b, c, d, e] {
            result.expect("Every buy should succeed");
        }

        let position = load_position(&pool, &user_id, &stock_id).expect("Position should exist");
        assert_eq!(position.quantity, 50);
        assert_eq!(parse_decimal(&position.average_buy_price, "avg"), dec!(10));
        assert_eq!(ledger_count(&pool, &user_id), 5);

        let mut conn = get_connection(&pool).expect("Failed to get connection");
        let user = users::table
            .find(&user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .expect("User should exist");
        assert_eq!(parse_decimal(&user.balance, "balance"), dec!(9500.00));
        assert_eq!(
            parse_decimal(&user.portfolio_value, "portfolio_value"),
            dec!(500)
        );
    }

    #[tokio::test]
    async fn test_sell_without_position_rejected() {
        let (executor, pool, _dir) = create_test_executor().await;
        let user_id = seed_user(&pool);
        let stock_id = seed_stock(&pool, "TSLA", dec!(250));

        let result = executor.execute(sell(&user_id, &stock_id, 1, dec!(250))).await;

        assert!(matches!(
            result,
            Err(Error::Trading(TradingError::PositionNotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_unknown_stock_rejected() {
        let (executor, pool, _dir) = create_test_executor().await;
        let user_id = seed_user(&pool);

        let result = executor
            .execute(buy(&user_id, "missing-stock", 1, dec!(1)))
            .await;

        assert!(matches!(
            result,
            Err(Error::Trading(TradingError::StockNotFound(_)))
        ));
    }
}
