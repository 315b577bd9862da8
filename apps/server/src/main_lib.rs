use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::auth::AuthManager;
use crate::config::Config;
use tradesim_core::portfolio::{PortfolioService, PortfolioServiceTrait};
use tradesim_core::stocks::{StockService, StockServiceTrait};
use tradesim_core::trading::{TradingService, TradingServiceTrait};
use tradesim_core::transactions::TransactionRepositoryTrait;
use tradesim_core::users::{UserService, UserServiceTrait};
use tradesim_core::watchlist::{WatchlistService, WatchlistServiceTrait};
use tradesim_storage_sqlite::db::{self, write_actor};
use tradesim_storage_sqlite::positions::PositionRepository;
use tradesim_storage_sqlite::stocks::StockRepository;
use tradesim_storage_sqlite::trading::TradeExecutor;
use tradesim_storage_sqlite::transactions::TransactionRepository;
use tradesim_storage_sqlite::users::UserRepository;
use tradesim_storage_sqlite::watchlist::WatchlistRepository;

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub stock_service: Arc<dyn StockServiceTrait + Send + Sync>,
    pub trading_service: Arc<dyn TradingServiceTrait + Send + Sync>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait + Send + Sync>,
    pub watchlist_service: Arc<dyn WatchlistServiceTrait + Send + Sync>,
    pub transaction_repository: Arc<dyn TransactionRepositoryTrait + Send + Sync>,
    pub auth: Arc<AuthManager>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("TRADESIM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let user_service = Arc::new(UserService::new(user_repository.clone()));

    let stock_repository = Arc::new(StockRepository::new(pool.clone(), writer.clone()));
    let stock_service = Arc::new(StockService::new(stock_repository.clone()));

    let trade_executor = Arc::new(TradeExecutor::new(writer.clone()));
    let trading_service = Arc::new(TradingService::new(trade_executor));

    let position_repository = Arc::new(PositionRepository::new(pool.clone()));
    let transaction_repository = Arc::new(TransactionRepository::new(pool.clone()));
    let portfolio_service = Arc::new(PortfolioService::new(
        user_repository.clone(),
        position_repository,
        transaction_repository.clone(),
    ));

    let watchlist_repository = Arc::new(WatchlistRepository::new(pool.clone(), writer.clone()));
    let watchlist_service = Arc::new(WatchlistService::new(
        watchlist_repository,
        stock_repository.clone(),
    ));

    let auth = Arc::new(AuthManager::new(&config.jwt_secret, config.token_ttl_hours));

    Ok(Arc::new(AppState {
        user_service,
        stock_service,
        trading_service,
        portfolio_service,
        watchlist_service,
        transaction_repository,
        auth,
        db_path,
    }))
}
