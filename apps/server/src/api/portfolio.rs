use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use tradesim_core::portfolio::PortfolioSummary;

async fn get_portfolio(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PortfolioSummary>> {
    let summary = state.portfolio_service.get_portfolio(&auth.user_id)?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio", get(get_portfolio))
}
