//! Free-text parse route

use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;

use crate::core::ServerState;
use crate::extract::{Extraction, Lang};

pub fn router() -> Router<ServerState> {
    Router::new().route("/parse", post(parse))
}

#[derive(Debug, Deserialize)]
pub struct ParseIn {
    pub text: String,
    #[serde(default = "default_matcher")]
    pub matcher: String,
    #[serde(default)]
    pub lang: Lang,
}

fn default_matcher() -> String {
    "hybrid".to_string()
}

/// POST /parse - best-effort order-code extraction from free text
pub async fn parse(
    State(state): State<ServerState>,
    Json(payload): Json<ParseIn>,
) -> Json<Extraction> {
    let result = state
        .extractor
        .extract(&payload.text, &payload.matcher, payload.lang)
        .await;
    Json(result)
}
