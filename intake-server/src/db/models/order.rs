//! Order row

use serde::{Deserialize, Serialize};

/// An order, identified by its caller-supplied code.
/// Write-once: never updated or deleted after creation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub code: String,
    /// Unix millis
    pub created_at: i64,
}
