//! Repository for the `freezers` table.

use freezo_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::freezer::{CreateFreezer, Freezer, FreezerDeletion};
use crate::repositories::ItemRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides list/create/delete for freezers.
pub struct FreezerRepo;

impl FreezerRepo {
    /// List all freezers in storage order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Freezer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM freezers");
        sqlx::query_as::<_, Freezer>(&query).fetch_all(pool).await
    }

    /// Find a freezer by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Freezer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM freezers WHERE id = ?");
        sqlx::query_as::<_, Freezer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a freezer, returning the created row with its timestamps.
    pub async fn create(pool: &SqlitePool, input: &CreateFreezer) -> Result<Freezer, sqlx::Error> {
        let query = format!("INSERT INTO freezers (name) VALUES (?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Freezer>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Delete a freezer unless items still reference it.
    ///
    /// The dependent-item count and the delete share one transaction, so the
    /// guard holds whether or not the store enforces foreign keys. Deleting
    /// an unknown ID is a successful no-op.
    pub async fn delete_if_empty(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<FreezerDeletion, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let item_count = ItemRepo::count_in_freezer(&mut *tx, id).await?;
        if item_count > 0 {
            tracing::debug!(freezer_id = id, item_count, "Freezer still holds items");
            return Ok(FreezerDeletion::HasItems);
        }

        sqlx::query("DELETE FROM freezers WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(FreezerDeletion::Deleted)
    }
}
