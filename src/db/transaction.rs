use sqlx::sqlite::SqlitePool;

use crate::models::WalletTransaction;

/// Insert a new transaction record
pub async fn insert_transaction(
    pool: &SqlitePool,
    tx: &WalletTransaction,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO wallet_transaction (uuid, wallet_id, kind, amount, date_created) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&tx.uuid)
    .bind(&tx.wallet_id)
    .bind(tx.kind)
    .bind(tx.amount)
    .bind(&tx.date_created)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get transaction by UUID
pub async fn get_transaction_by_uuid(
    pool: &SqlitePool,
    uuid: &str,
) -> Result<Option<WalletTransaction>, sqlx::Error> {
    sqlx::query_as::<_, WalletTransaction>(
        "SELECT uuid, wallet_id, kind, amount, date_created \
         FROM wallet_transaction WHERE uuid = ?",
    )
    .bind(uuid)
    .fetch_optional(pool)
    .await
}

/// Get all transactions for a wallet, in insertion order. An unknown wallet
/// id yields an empty list, not an error.
pub async fn get_transactions_by_wallet(
    pool: &SqlitePool,
    wallet_id: &str,
) -> Result<Vec<WalletTransaction>, sqlx::Error> {
    sqlx::query_as::<_, WalletTransaction>(
        "SELECT uuid, wallet_id, kind, amount, date_created \
         FROM wallet_transaction WHERE wallet_id = ? ORDER BY rowid",
    )
    .bind(wallet_id)
    .fetch_all(pool)
    .await
}

/// Get one page of a wallet's transactions (1-based page) plus the total
/// record count for that wallet
pub async fn get_transactions_by_wallet_paginated(
    pool: &SqlitePool,
    wallet_id: &str,
    page: u32,
    per_page: u32,
) -> Result<(Vec<WalletTransaction>, u64), sqlx::Error> {
    let total = count_transactions_by_wallet(pool, wallet_id).await?;

    let offset = (page.saturating_sub(1) as i64) * per_page as i64;
    let rows = sqlx::query_as::<_, WalletTransaction>(
        "SELECT uuid, wallet_id, kind, amount, date_created \
         FROM wallet_transaction WHERE wallet_id = ? ORDER BY rowid LIMIT ? OFFSET ?",
    )
    .bind(wallet_id)
    .bind(per_page as i64)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok((rows, total))
}

/// Count transactions for a wallet
pub async fn count_transactions_by_wallet(
    pool: &SqlitePool,
    wallet_id: &str,
) -> Result<u64, sqlx::Error> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM wallet_transaction WHERE wallet_id = ?")
            .bind(wallet_id)
            .fetch_one(pool)
            .await?;

    Ok(count as u64)
}

/// Delete a transaction by UUID, reporting whether a record was removed
pub async fn delete_transaction(pool: &SqlitePool, uuid: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM wallet_transaction WHERE uuid = ?")
        .bind(uuid)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::models::TransactionKind;

    fn record(uuid: &str, wallet_id: &str, amount: f64) -> WalletTransaction {
        WalletTransaction {
            uuid: uuid.to_string(),
            wallet_id: wallet_id.to_string(),
            kind: TransactionKind::Credit,
            amount,
            date_created: "2026-08-06 12:00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unknown_wallet_returns_empty_list() {
        let pool = test_pool().await;

        let rows = get_transactions_by_wallet(&pool, "W3").await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_returns_exactly_the_wallets_records() {
        let pool = test_pool().await;

        let t1 = record("T1", "W1", 100.0);
        let t2 = record("T2", "W1", 25.5);
        let t3 = record("T3", "W2", 40.0);
        insert_transaction(&pool, &t1).await.unwrap();
        insert_transaction(&pool, &t2).await.unwrap();
        insert_transaction(&pool, &t3).await.unwrap();

        let w1 = get_transactions_by_wallet(&pool, "W1").await.unwrap();
        assert_eq!(w1, vec![t1, t2]);

        let w2 = get_transactions_by_wallet(&pool, "W2").await.unwrap();
        assert_eq!(w2, vec![t3]);

        let w3 = get_transactions_by_wallet(&pool, "W3").await.unwrap();
        assert!(w3.is_empty());
    }

    #[tokio::test]
    async fn test_no_cross_wallet_leakage() {
        let pool = test_pool().await;

        for i in 0..10 {
            let wallet = if i % 2 == 0 { "even" } else { "odd" };
            insert_transaction(&pool, &record(&format!("T{}", i), wallet, i as f64))
                .await
                .unwrap();
        }

        let rows = get_transactions_by_wallet(&pool, "even").await.unwrap();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|tx| tx.wallet_id == "even"));
    }

    #[tokio::test]
    async fn test_repeated_lookup_is_idempotent() {
        let pool = test_pool().await;

        insert_transaction(&pool, &record("T1", "W1", 5.0)).await.unwrap();
        insert_transaction(&pool, &record("T2", "W1", 6.0)).await.unwrap();

        let first = get_transactions_by_wallet(&pool, "W1").await.unwrap();
        let second = get_transactions_by_wallet(&pool, "W1").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_by_uuid() {
        let pool = test_pool().await;

        let t1 = record("T1", "W1", 12.0);
        insert_transaction(&pool, &t1).await.unwrap();

        let found = get_transaction_by_uuid(&pool, "T1").await.unwrap();
        assert_eq!(found, Some(t1));

        let missing = get_transaction_by_uuid(&pool, "T9").await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_pagination() {
        let pool = test_pool().await;

        for i in 0..25 {
            insert_transaction(&pool, &record(&format!("T{:02}", i), "W1", i as f64))
                .await
                .unwrap();
        }

        let (page1, total) = get_transactions_by_wallet_paginated(&pool, "W1", 1, 10)
            .await
            .unwrap();
        assert_eq!(total, 25);
        assert_eq!(page1.len(), 10);
        assert_eq!(page1[0].uuid, "T00");

        let (page3, _) = get_transactions_by_wallet_paginated(&pool, "W1", 3, 10)
            .await
            .unwrap();
        assert_eq!(page3.len(), 5);
        assert_eq!(page3[0].uuid, "T20");

        let (page4, _) = get_transactions_by_wallet_paginated(&pool, "W1", 4, 10)
            .await
            .unwrap();
        assert!(page4.is_empty());
    }

    #[tokio::test]
    async fn test_count_and_delete() {
        let pool = test_pool().await;

        insert_transaction(&pool, &record("T1", "W1", 1.0)).await.unwrap();
        insert_transaction(&pool, &record("T2", "W1", 2.0)).await.unwrap();
        assert_eq!(count_transactions_by_wallet(&pool, "W1").await.unwrap(), 2);

        assert!(delete_transaction(&pool, "T1").await.unwrap());
        assert!(!delete_transaction(&pool, "T1").await.unwrap());
        assert_eq!(count_transactions_by_wallet(&pool, "W1").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_uuid_is_rejected() {
        let pool = test_pool().await;

        insert_transaction(&pool, &record("T1", "W1", 1.0)).await.unwrap();
        let err = insert_transaction(&pool, &record("T1", "W2", 2.0)).await;
        assert!(err.is_err());
    }
}
