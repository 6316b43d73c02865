//! Order intake handlers
//!
//! Payments and events never fail on an unknown code: the store creates the
//! order row inside the same transaction (intake availability over
//! referential strictness).

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::EventKind;
use crate::db::repository::{event, order, payment};
use crate::utils::time;
use crate::utils::validation::{MAX_CODE_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// Validate an amount is a finite positive number
fn validate_amount(value: f64) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::validation("amount must be a finite number"));
    }
    if value <= 0.0 {
        return Err(AppError::validation(format!(
            "amount must be positive, got {value}"
        )));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct OrderIn {
    pub code: String,
}

#[derive(Serialize)]
pub struct OrderOut {
    ok: bool,
    code: String,
    created: bool,
}

/// POST /orders - create an order; an existing code is a no-op
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderIn>,
) -> AppResult<Json<OrderOut>> {
    validate_required_text(&payload.code, "code", MAX_CODE_LEN)?;

    let created = order::create_if_absent(&state.pool, &payload.code, time::now_millis()).await?;

    Ok(Json(OrderOut {
        ok: true,
        code: payload.code,
        created,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PaymentIn {
    pub amount: f64,
}

#[derive(Serialize)]
pub struct PaymentOut {
    ok: bool,
    code: String,
    amount: f64,
}

/// POST /orders/{code}/payments - record a payment against an order code
pub async fn record_payment(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    Json(payload): Json<PaymentIn>,
) -> AppResult<Json<PaymentOut>> {
    validate_required_text(&code, "code", MAX_CODE_LEN)?;
    validate_amount(payload.amount)?;

    let p = payment::append(&state.pool, &code, payload.amount, time::now_millis()).await?;

    Ok(Json(PaymentOut {
        ok: true,
        code,
        amount: p.amount,
    }))
}

#[derive(Debug, Deserialize)]
pub struct EventIn {
    pub event: String,
}

#[derive(Serialize)]
pub struct EventOut {
    ok: bool,
    code: String,
    event: String,
}

/// POST /orders/{code}/event - record a lifecycle event against an order code
pub async fn record_event(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    Json(payload): Json<EventIn>,
) -> AppResult<Json<EventOut>> {
    validate_required_text(&code, "code", MAX_CODE_LEN)?;

    let kind = EventKind::parse(&payload.event).ok_or_else(|| {
        AppError::validation(format!(
            "event must be one of {}, got {}",
            EventKind::names().join(", "),
            payload.event
        ))
    })?;

    let ev = event::append(&state.pool, &code, kind, time::now_millis()).await?;

    Ok(Json(EventOut {
        ok: true,
        code,
        event: ev.kind,
    }))
}
