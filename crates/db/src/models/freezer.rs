//! Freezer model and DTOs.

use freezo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `freezers` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Freezer {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new freezer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFreezer {
    pub name: String,
}

/// Outcome of [`FreezerRepo::delete_if_empty`](crate::repositories::FreezerRepo::delete_if_empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreezerDeletion {
    /// No items referenced the freezer; the row (if any) is gone.
    Deleted,
    /// Items still reference the freezer; nothing was deleted.
    HasItems,
}
