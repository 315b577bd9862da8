//! HTTP error mapping for the API.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use tradesim_core::errors::DatabaseError;
use tradesim_core::trading::TradingError;
use tradesim_core::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// An API error: a status code plus a client-facing message.
///
/// Internal failures are logged with their full detail and surface to the
/// client as a generic 500.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match &err {
            Error::Validation(e) => Self::bad_request(e.to_string()),
            Error::Trading(e) if e.is_not_found() => Self::not_found(e.to_string()),
            Error::Trading(e @ TradingError::InsufficientFunds { .. })
            | Error::Trading(e @ TradingError::InsufficientShares { .. }) => {
                Self::bad_request(e.to_string())
            }
            Error::Database(DatabaseError::NotFound(msg)) => Self::not_found(msg.clone()),
            Error::Database(DatabaseError::UniqueViolation(msg)) => Self::conflict(msg.clone()),
            Error::Database(DatabaseError::ForeignKeyViolation(_)) => {
                Self::conflict("Record is still referenced by other data")
            }
            Error::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg.clone()),
            _ => {
                tracing::error!("Internal error: {err}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("Internal error: {err:#}");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// JSON body extractor that reports malformed or incomplete bodies as 400,
/// replacing axum's default 422 rejection.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}
