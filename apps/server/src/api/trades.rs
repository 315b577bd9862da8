use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::error::{ApiJson, ApiResult};
use crate::main_lib::AppState;
use tradesim_core::constants::DEFAULT_PAGE_SIZE;
use tradesim_core::trading::{TradeExecution, TradeRequest};
use tradesim_core::transactions::{TradeSide, TransactionPage};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TradeBody {
    stock_id: String,
    side: TradeSide,
    quantity: i64,
    price: Decimal,
}

async fn execute_trade(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<TradeBody>,
) -> ApiResult<(StatusCode, Json<TradeExecution>)> {
    let execution = state
        .trading_service
        .execute_trade(TradeRequest {
            user_id: auth.user_id,
            stock_id: body.stock_id,
            side: body.side,
            quantity: body.quantity,
            price: body.price,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(execution)))
}

#[derive(Deserialize)]
struct PageParams {
    page: Option<i64>,
    limit: Option<i64>,
}

async fn list_transactions(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<TransactionPage>> {
    let page = state.transaction_repository.list_by_user(
        &auth.user_id,
        params.page.unwrap_or(0),
        params.limit.unwrap_or(DEFAULT_PAGE_SIZE),
    )?;
    Ok(Json(page))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/trades", post(execute_trade))
        .route("/transactions", get(list_transactions))
}
