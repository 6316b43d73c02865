//! CSV export route

pub(crate) mod csv;
mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/export/csv", get(handler::export_csv))
}
