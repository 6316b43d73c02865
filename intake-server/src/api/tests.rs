//! Router-level tests over an in-memory database

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use crate::core::{Config, ServerState, build_app};
use crate::extract::CodeExtractor;

async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    crate::db::init_schema(&pool).await.unwrap();

    let state = ServerState::new(
        Config::with_overrides(0, ":memory:"),
        pool,
        CodeExtractor::new(None),
    );
    build_app().with_state(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"ok": true}));
}

#[tokio::test]
async fn order_creation_is_idempotent() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json("/orders", json!({"code": "OS-1001"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let first = body_json(response).await;
    assert_eq!(first, json!({"ok": true, "code": "OS-1001", "created": true}));

    let second = body_json(
        app.oneshot(post_json("/orders", json!({"code": "OS-1001"})))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(second["created"], json!(false));
}

#[tokio::test]
async fn rejects_a_blank_order_code() {
    let app = test_app().await;

    let response = app
        .oneshot(post_json("/orders", json!({"code": "   "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], json!("validation_error"));
}

#[tokio::test]
async fn records_payment_and_event_then_exports() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json("/orders/X1/payments", json!({"amount": 12.5})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"ok": true, "code": "X1", "amount": 12.5})
    );

    let response = app
        .clone()
        .oneshot(post_json("/orders/X1/event", json!({"event": "RETURN"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"ok": true, "code": "X1", "event": "RETURN"})
    );

    let response = app.oneshot(get("/export/csv")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"export.csv\""
    );

    let today = chrono::Utc::now().date_naive();
    let text = body_text(response).await;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "type,order_code,date,amount_or_event,unsettled");
    assert_eq!(lines[1], format!("payment,X1,{today},12.50,false"));
    assert_eq!(lines[2], format!("event,X1,{today},RETURN,false"));
}

#[tokio::test]
async fn rejects_a_non_positive_amount() {
    let app = test_app().await;

    for amount in [0.0, -3.5] {
        let response = app
            .clone()
            .oneshot(post_json("/orders/X1/payments", json!({"amount": amount})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], json!("validation_error"));
    }

    // nothing was recorded
    let text = body_text(app.oneshot(get("/export/csv")).await.unwrap()).await;
    assert_eq!(text.lines().count(), 1);
}

#[tokio::test]
async fn rejects_an_unknown_event_kind() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json("/orders/X1/event", json!({"event": "REFUND"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("validation_error"));

    let text = body_text(app.oneshot(get("/export/csv")).await.unwrap()).await;
    assert_eq!(text.lines().count(), 1);
}

#[tokio::test]
async fn parse_finds_a_code() {
    let app = test_app().await;

    let response = app
        .oneshot(post_json("/parse", json!({"text": "Order OS-1234 confirmed"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body["match"],
        json!({"order_code": "OS-1234", "reason": "regex-match"})
    );
    assert_eq!(body["parsed"]["raw_preview"], json!("Order OS-1234 confirmed"));
    assert_eq!(body["parsed"]["matcher"], json!("hybrid"));
    assert_eq!(body["parsed"]["lang"], json!("en"));
}

#[tokio::test]
async fn parse_without_a_code_returns_null_match() {
    let app = test_app().await;

    let body = body_json(
        app.oneshot(post_json("/parse", json!({"text": "no code here", "lang": "ms"})))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(body["match"], Value::Null);
    assert_eq!(body["parsed"]["lang"], json!("ms"));
}

#[tokio::test]
async fn export_rejects_a_malformed_date_bound() {
    let app = test_app().await;

    let response = app.oneshot(get("/export/csv?start=nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
