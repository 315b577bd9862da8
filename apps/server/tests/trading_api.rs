use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::{rngs::OsRng, RngCore};
use tempfile::tempdir;
use tower::ServiceExt;

use tradesim_core::users::UserRole;
use tradesim_server::auth::AuthManager;
use tradesim_server::{api::app_router, build_state, config::Config};

async fn build_test_app() -> (axum::Router, Vec<u8>, tempfile::TempDir) {
    let tmp = tempdir().unwrap();
    std::env::set_var("TRADESIM_DB_PATH", tmp.path().join("test.db"));

    let mut secret_bytes = [0u8; 32];
    OsRng.fill_bytes(&mut secret_bytes);
    std::env::set_var("TRADESIM_JWT_SECRET", BASE64.encode(secret_bytes));

    let config = Config::from_env().unwrap();
    let state = build_state(&config).await.unwrap();
    (app_router(state), secret_bytes.to_vec(), tmp)
}

fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, token: Option<&str>, body: &serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn register_trade_and_review_portfolio() {
    let (app, secret, _tmp) = build_test_app().await;

    // Health check needs no token
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Protected route without a token is rejected
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/portfolio")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Register a trader, starting with the default balance
    let register_body = serde_json::json!({
        "name": "Ada Trader",
        "email": "ada@example.com",
        "password": "super-secret"
    });
    let response = app
        .clone()
        .oneshot(post_json("/api/v1/auth/register", None, &register_body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let registered = json_body(response).await;
    let token = registered["accessToken"].as_str().unwrap().to_string();
    let user_id = registered["user"]["id"].as_str().unwrap().to_string();
    assert_eq!(registered["user"]["balance"].as_f64(), Some(10000.0));

    // Registering the same email again conflicts
    let response = app
        .clone()
        .oneshot(post_json("/api/v1/auth/register", None, &register_body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Login with the same credentials works
    let login_body = serde_json::json!({
        "email": "ada@example.com",
        "password": "super-secret"
    });
    let response = app
        .clone()
        .oneshot(post_json("/api/v1/auth/login", None, &login_body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Ordinary users cannot create stocks
    let stock_body = serde_json::json!({
        "symbol": "AAPL",
        "name": "Apple Inc.",
        "currentPrice": 175.50,
        "sector": "Technology"
    });
    let response = app
        .clone()
        .oneshot(post_json("/api/v1/stocks", Some(&token), &stock_body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // An admin token signed with the server's secret can
    let admin_token = AuthManager::new(&secret, 24)
        .issue_token(&user_id, UserRole::Admin)
        .unwrap();
    let response = app
        .clone()
        .oneshot(post_json("/api/v1/stocks", Some(&admin_token), &stock_body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let stock = json_body(response).await;
    let stock_id = stock["id"].as_str().unwrap().to_string();

    // Buy 10 shares at 175.50: balance drops to 8245.00
    let buy_body = serde_json::json!({
        "stockId": stock_id,
        "side": "BUY",
        "quantity": 10,
        "price": 175.50
    });
    let response = app
        .clone()
        .oneshot(post_json("/api/v1/trades", Some(&token), &buy_body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let execution = json_body(response).await;
    assert_eq!(execution["account"]["balance"].as_f64(), Some(8245.0));
    assert_eq!(execution["transaction"]["side"], "BUY");

    // A buy the balance cannot cover is rejected, nothing changes
    let oversized_buy = serde_json::json!({
        "stockId": stock_id,
        "side": "BUY",
        "quantity": 1000,
        "price": 175.50
    });
    let response = app
        .clone()
        .oneshot(post_json("/api/v1/trades", Some(&token), &oversized_buy))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A body missing a field is a 400, not axum's default 422
    let malformed_buy = serde_json::json!({
        "stockId": stock_id,
        "side": "BUY",
        "price": 175.50
    });
    let response = app
        .clone()
        .oneshot(post_json("/api/v1/trades", Some(&token), &malformed_buy))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Sell 4 at 180: proceeds are credited, cost basis stays at 175.50
    let sell_body = serde_json::json!({
        "stockId": stock_id,
        "side": "SELL",
        "quantity": 4,
        "price": 180
    });
    let response = app
        .clone()
        .oneshot(post_json("/api/v1/trades", Some(&token), &sell_body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let execution = json_body(response).await;
    assert_eq!(execution["account"]["balance"].as_f64(), Some(8965.0));

    // Portfolio reflects the remaining position
    let response = app
        .clone()
        .oneshot(get("/api/v1/portfolio", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let portfolio = json_body(response).await;
    assert_eq!(portfolio["balance"].as_f64(), Some(8965.0));
    assert_eq!(portfolio["positions"].as_array().unwrap().len(), 1);
    assert_eq!(portfolio["positions"][0]["quantity"].as_i64(), Some(6));
    assert_eq!(
        portfolio["positions"][0]["averageBuyPrice"].as_f64(),
        Some(175.5)
    );

    // Both trades are on the ledger, newest first
    let response = app
        .clone()
        .oneshot(get("/api/v1/transactions?page=0&limit=10", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let transactions = json_body(response).await;
    assert_eq!(transactions["total"].as_i64(), Some(2));
    assert_eq!(transactions["transactions"][0]["side"], "SELL");

    // The stock is still held, so deleting it conflicts instead of failing
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/v1/stocks/{stock_id}"))
                .header(header::AUTHORIZATION, format!("Bearer {admin_token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Watchlist round-trip
    let watch_body = serde_json::json!({ "stockId": stock_id });
    let response = app
        .clone()
        .oneshot(post_json("/api/v1/watchlist/items", Some(&token), &watch_body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let item = json_body(response).await;
    let item_id = item["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(get("/api/v1/watchlist", &token))
        .await
        .unwrap();
    let watchlist = json_body(response).await;
    assert_eq!(watchlist.as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/v1/watchlist/items/{item_id}"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    for key in ["TRADESIM_DB_PATH", "TRADESIM_JWT_SECRET"] {
        std::env::remove_var(key);
    }
}
