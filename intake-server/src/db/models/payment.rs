//! Payment row

use serde::{Deserialize, Serialize};

/// A recorded payment. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Payment {
    pub id: i64,
    pub order_code: String,
    pub amount: f64,
    /// Unix millis
    pub created_at: i64,
}
