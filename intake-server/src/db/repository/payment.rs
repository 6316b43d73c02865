//! Payment Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::Payment;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Payment>> {
    let payment = sqlx::query_as::<_, Payment>(
        "SELECT id, order_code, amount, created_at FROM payment WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(payment)
}

/// Append a payment, creating the order row first if the code is unseen.
/// Both writes happen in one transaction.
pub async fn append(pool: &SqlitePool, order_code: &str, amount: f64, now: i64) -> RepoResult<Payment> {
    let mut tx = pool.begin().await?;

    sqlx::query("INSERT OR IGNORE INTO orders (code, created_at) VALUES (?1, ?2)")
        .bind(order_code)
        .bind(now)
        .execute(&mut *tx)
        .await?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO payment (order_code, amount, created_at) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(order_code)
    .bind(amount)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to record payment".into()))
}

/// Full unfiltered scan
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Payment>> {
    let payments = sqlx::query_as::<_, Payment>(
        "SELECT id, order_code, amount, created_at FROM payment ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(payments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::order;
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
    async fn append_auto_creates_the_order() {
        let pool = test_pool().await;

        let p = append(&pool, "X1", 12.5, 1_700_000_000_000).await.unwrap();
        assert_eq!(p.order_code, "X1");
        assert_eq!(p.amount, 12.5);
        assert_eq!(p.created_at, 1_700_000_000_000);

        let order = order::find_by_code(&pool, "X1").await.unwrap().unwrap();
        assert_eq!(order.created_at, 1_700_000_000_000);
    }

    #[tokio::test]
    async fn append_leaves_an_existing_order_untouched() {
        let pool = test_pool().await;

        order::create_if_absent(&pool, "X1", 1_600_000_000_000).await.unwrap();
        append(&pool, "X1", 5.0, 1_700_000_000_000).await.unwrap();

        let order = order::find_by_code(&pool, "X1").await.unwrap().unwrap();
        assert_eq!(order.created_at, 1_600_000_000_000);
    }

    #[tokio::test]
    async fn find_all_returns_every_payment() {
        let pool = test_pool().await;

        append(&pool, "X1", 12.5, 1_700_000_000_000).await.unwrap();
        append(&pool, "X2", 3.0, 1_700_000_100_000).await.unwrap();

        let all = find_all(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].id < all[1].id);
    }
}
