use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::error::{ApiJson, ApiResult};
use crate::main_lib::AppState;
use tradesim_core::watchlist::{WatchlistEntry, WatchlistItem};

async fn list_watchlist(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<WatchlistEntry>>> {
    let entries = state.watchlist_service.list_watchlist(&auth.user_id)?;
    Ok(Json(entries))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddRequest {
    stock_id: String,
}

async fn add_to_watchlist(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<AddRequest>,
) -> ApiResult<(StatusCode, Json<WatchlistItem>)> {
    let item = state
        .watchlist_service
        .add_stock(&auth.user_id, &body.stock_id)
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn remove_from_watchlist(
    auth: AuthUser,
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state
        .watchlist_service
        .remove_item(&id, &auth.user_id, auth.is_admin())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/watchlist", get(list_watchlist))
        .route("/watchlist/items", post(add_to_watchlist))
        .route("/watchlist/items/{id}", delete(remove_from_watchlist))
}
