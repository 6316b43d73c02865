//! Event Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{EventKind, EventRecord};

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<EventRecord>> {
    let event = sqlx::query_as::<_, EventRecord>(
        "SELECT id, order_code, kind, created_at FROM event WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(event)
}

/// Append an event, creating the order row first if the code is unseen.
/// Both writes happen in one transaction.
pub async fn append(
    pool: &SqlitePool,
    order_code: &str,
    kind: EventKind,
    now: i64,
) -> RepoResult<EventRecord> {
    let mut tx = pool.begin().await?;

    sqlx::query("INSERT OR IGNORE INTO orders (code, created_at) VALUES (?1, ?2)")
        .bind(order_code)
        .bind(now)
        .execute(&mut *tx)
        .await?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO event (order_code, kind, created_at) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(order_code)
    .bind(kind.as_str())
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to record event".into()))
}

/// Full unfiltered scan
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<EventRecord>> {
    let events = sqlx::query_as::<_, EventRecord>(
        "SELECT id, order_code, kind, created_at FROM event ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(events)
}
