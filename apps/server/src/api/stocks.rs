use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::auth::AdminUser;
use crate::error::{ApiJson, ApiResult};
use crate::main_lib::AppState;
use tradesim_core::stocks::{NewStock, Stock, StockSearchResult, StockUpdate};

async fn list_stocks(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Stock>>> {
    let stocks = state.stock_service.list_stocks()?;
    Ok(Json(stocks))
}

#[derive(Deserialize)]
struct SearchParams {
    q: String,
}

async fn search_stocks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<StockSearchResult>>> {
    let results = state.stock_service.search_stocks(&params.q)?;
    Ok(Json(results))
}

async fn get_stock(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Stock>> {
    let stock = state.stock_service.get_stock(&id)?;
    Ok(Json(stock))
}

async fn create_stock(
    _admin: AdminUser,
    State(state): State<Arc<AppState>>,
    ApiJson(new_stock): ApiJson<NewStock>,
) -> ApiResult<(StatusCode, Json<Stock>)> {
    let stock = state.stock_service.create_stock(new_stock).await?;
    Ok((StatusCode::CREATED, Json(stock)))
}

async fn update_stock(
    _admin: AdminUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiJson(update): ApiJson<StockUpdate>,
) -> ApiResult<Json<Stock>> {
    let stock = state.stock_service.update_stock(&id, update).await?;
    Ok(Json(stock))
}

async fn delete_stock(
    _admin: AdminUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.stock_service.delete_stock(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stocks", get(list_stocks).post(create_stock))
        .route("/stocks/search", get(search_stocks))
        .route(
            "/stocks/{id}",
            get(get_stock).put(update_stock).delete(delete_stock),
        )
}
