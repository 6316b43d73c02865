//! Order intake routes

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/orders", post(handler::create))
        .route("/orders/{code}/payments", post(handler::record_payment))
        .route("/orders/{code}/event", post(handler::record_event))
}
