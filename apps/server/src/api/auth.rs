use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiJson, ApiResult};
use crate::main_lib::AppState;
use tradesim_core::users::{NewUser, User, UserRole};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    user: User,
    access_token: String,
}

async fn register(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    if body.password.len() < 8 {
        return Err(ApiError::bad_request(
            "Password must be at least 8 characters",
        ));
    }

    let password_hash = state.auth.hash_password(&body.password)?;
    let user = state
        .user_service
        .register_user(NewUser {
            name: body.name,
            email: body.email,
            password_hash,
            role: UserRole::User,
        })
        .await?;

    let access_token = state.auth.issue_token(&user.id, user.role)?;
    Ok((StatusCode::CREATED, Json(AuthResponse { user, access_token })))
}

async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let credentials = state
        .user_service
        .get_credentials(&body.email)?
        .filter(|c| state.auth.verify_password(&body.password, &c.password_hash))
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    let user = credentials.user;
    let access_token = state.auth.issue_token(&user.id, user.role)?;
    Ok(Json(AuthResponse { user, access_token }))
}

async fn me(auth: AuthUser, State(state): State<Arc<AppState>>) -> ApiResult<Json<User>> {
    let user = state.user_service.get_user(&auth.user_id)?;
    Ok(Json(user))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
}
