//! Repository for the `categories` table.

use sqlx::SqlitePool;

use crate::models::category::{Category, CreateCategory};

const COLUMNS: &str = "id, name";

/// Provides list/create for categories. There is no delete.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories in storage order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Create a category, returning the created row.
    ///
    /// A duplicate name surfaces as the store's unique-constraint error.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateCategory,
    ) -> Result<Category, sqlx::Error> {
        let query = format!("INSERT INTO categories (name) VALUES (?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Number of category rows.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(pool)
            .await
    }
}
