//! Flat CSV rendering of recorded activity
//!
//! One row per payment and per event:
//! `type,order_code,date,amount_or_event,unsettled`. The date is the UTC
//! calendar date of the record. `unsettled` is a reserved column and always
//! renders as `false`.

use chrono::NaiveDate;

use crate::db::models::{EventRecord, Payment};
use crate::utils::time;

const HEADER: &str = "type,order_code,date,amount_or_event,unsettled";

/// Render payments then events, each in insertion order, optionally bounded
/// to `[start, end]` by calendar date (inclusive on both ends).
pub fn build_csv(
    payments: &[Payment],
    events: &[EventRecord],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for p in payments {
        let date = time::millis_to_utc_date(p.created_at);
        if in_bounds(date, start, end) {
            push_row(&mut out, "payment", &p.order_code, date, &format!("{:.2}", p.amount));
        }
    }
    for e in events {
        let date = time::millis_to_utc_date(e.created_at);
        if in_bounds(date, start, end) {
            push_row(&mut out, "event", &e.order_code, date, &e.kind);
        }
    }

    out
}

fn in_bounds(date: NaiveDate, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    if start.is_some_and(|s| date < s) {
        return false;
    }
    if end.is_some_and(|e| date > e) {
        return false;
    }
    true
}

fn push_row(out: &mut String, row_type: &str, code: &str, date: NaiveDate, value: &str) {
    out.push_str(row_type);
    out.push(',');
    out.push_str(&field(code));
    out.push(',');
    out.push_str(&date.to_string());
    out.push(',');
    out.push_str(&field(value));
    out.push_str(",false\n");
}

/// Quote a field when it contains a delimiter, quote or line break
fn field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
