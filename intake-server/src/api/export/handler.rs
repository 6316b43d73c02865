//! CSV export handler

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;

use super::csv;
use crate::core::ServerState;
use crate::db::repository::{event, payment};
use crate::utils::AppResult;
use crate::utils::time;

/// Query params for the export.
///
/// `children`, `adjustments` and `unsettled` are accepted for compatibility
/// with existing export clients and have no effect on the output.
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(default = "default_true")]
    pub children: bool,
    #[serde(default = "default_true")]
    pub adjustments: bool,
    #[serde(default)]
    pub unsettled: bool,
}

fn default_true() -> bool {
    true
}

/// GET /export/csv - every recorded payment and event as a flat CSV attachment
pub async fn export_csv(
    State(state): State<ServerState>,
    Query(query): Query<ExportQuery>,
) -> AppResult<impl IntoResponse> {
    let start = query.start.as_deref().map(time::parse_date).transpose()?;
    let end = query.end.as_deref().map(time::parse_date).transpose()?;

    tracing::debug!(
        children = query.children,
        adjustments = query.adjustments,
        unsettled = query.unsettled,
        "Export flags accepted but not applied"
    );

    let payments = payment::find_all(&state.pool).await?;
    let events = event::find_all(&state.pool).await?;

    let body = csv::build_csv(&payments, &events, start, end);

    let headers = [
        (header::CONTENT_TYPE, "text/csv"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"export.csv\"",
        ),
    ];
    Ok((headers, body))
}
