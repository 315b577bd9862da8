use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub mod auth;
pub mod health;
pub mod portfolio;
pub mod stocks;
pub mod trades;
pub mod watchlist;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(auth::router())
        .merge(health::router())
        .merge(portfolio::router())
        .merge(stocks::router())
        .merge(trades::router())
        .merge(watchlist::router());

    Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
