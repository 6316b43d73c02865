//! Order Repository

use sqlx::SqlitePool;

use super::RepoResult;
use crate::db::models::Order;

pub async fn find_by_code(pool: &SqlitePool, code: &str) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>("SELECT code, created_at FROM orders WHERE code = ?")
        .bind(code)
        .fetch_optional(pool)
        .await?;
    Ok(order)
}

/// Atomic check-then-insert. Returns whether a new row was inserted;
/// an existing code is left untouched.
pub async fn create_if_absent(pool: &SqlitePool, code: &str, now: i64) -> RepoResult<bool> {
    let result = sqlx::query("INSERT OR IGNORE INTO orders (code, created_at) VALUES (?1, ?2)")
        .bind(code)
        .bind(now)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::init_schema(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn creation_is_idempotent() {
        let pool = test_pool().await;

        assert!(create_if_absent(&pool, "OS-1001", 1_700_000_000_000).await.unwrap());
        assert!(!create_if_absent(&pool, "OS-1001", 1_700_000_100_000).await.unwrap());

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);

        // First write wins
        let order = find_by_code(&pool, "OS-1001").await.unwrap().unwrap();
        assert_eq!(order.created_at, 1_700_000_000_000);
    }

    #[tokio::test]
    async fn missing_code_is_none() {
        let pool = test_pool().await;
        assert!(find_by_code(&pool, "OS-9999").await.unwrap().is_none());
    }
}
