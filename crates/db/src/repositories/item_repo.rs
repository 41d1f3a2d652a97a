//! Repository for the `items` table.
//!
//! Batch operations (create, consume, move) each run in one transaction:
//! either every row is written or none is. `tx` is dropped without commit
//! on the first error, which rolls the batch back.

use freezo_core::types::DbId;
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::models::item::{Item, ItemInput, UpdateItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, category_id, freezer_id, weight, frozen_date, created_at, updated_at";

/// Provides CRUD and batch operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// List all items in storage order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Find an item by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = ?");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count the items stored in a freezer.
    ///
    /// Generic over the executor so callers can run it inside a transaction.
    pub async fn count_in_freezer<'e, E>(executor: E, freezer_id: DbId) -> Result<i64, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM items WHERE freezer_id = ?")
            .bind(freezer_id)
            .fetch_one(executor)
            .await
    }

    /// Insert one item, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &ItemInput) -> Result<Item, sqlx::Error> {
        Self::insert(pool, input).await
    }

    /// Insert every item in order inside one transaction.
    ///
    /// Returns the created rows in input order. Any failing insert aborts the
    /// whole batch.
    pub async fn create_batch(
        pool: &SqlitePool,
        inputs: &[ItemInput],
    ) -> Result<Vec<Item>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            created.push(Self::insert(&mut *tx, input).await?);
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Overwrite every mutable field and refresh `updated_at`.
    ///
    /// Returns `None` if no item has the given ID; nothing is written then.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateItem,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET \
                name = ?, \
                category_id = ?, \
                freezer_id = ?, \
                weight = ?, \
                frozen_date = ?, \
                updated_at = CURRENT_TIMESTAMP \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.name)
            .bind(input.category_id)
            .bind(input.freezer_id)
            .bind(&input.weight)
            .bind(input.frozen_date)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every listed item inside one transaction.
    ///
    /// Unknown IDs are skipped. Returns the number of rows removed.
    pub async fn delete_many(pool: &SqlitePool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let mut deleted = 0;
        for &id in ids {
            let result = sqlx::query("DELETE FROM items WHERE id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            deleted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(deleted)
    }

    /// Reassign every listed item to `freezer_id` inside one transaction,
    /// refreshing `updated_at`.
    ///
    /// The target freezer is not looked up here; with foreign keys enforced
    /// the store rejects an unknown target and the move rolls back. Returns
    /// the number of rows updated.
    pub async fn move_to_freezer(
        pool: &SqlitePool,
        ids: &[DbId],
        freezer_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let mut moved = 0;
        for &id in ids {
            let result = sqlx::query(
                "UPDATE items SET freezer_id = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
            )
            .bind(freezer_id)
            .bind(id)
            .execute(&mut *tx)
            .await?;
            moved += result.rows_affected();
        }

        tx.commit().await?;
        Ok(moved)
    }

    async fn insert<'e, E>(executor: E, input: &ItemInput) -> Result<Item, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!(
            "INSERT INTO items (name, category_id, freezer_id, weight, frozen_date) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.name)
            .bind(input.category_id)
            .bind(input.freezer_id)
            .bind(&input.weight)
            .bind(input.frozen_date)
            .fetch_one(executor)
            .await
    }
}
