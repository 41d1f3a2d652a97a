//! Item model and DTOs, including the batch request payloads.

use freezo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `items` table.
///
/// `weight` is free-form text ("500g", "2 bags") and is left out of the JSON
/// when absent. `category_id` and `frozen_date` serialize as `null`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub category_id: Option<DbId>,
    pub freezer_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    pub frozen_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Item payload accepted by create and batch create.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemInput {
    pub name: String,
    pub category_id: Option<DbId>,
    pub freezer_id: DbId,
    pub weight: Option<String>,
    pub frozen_date: Option<Timestamp>,
}

/// Body of `PUT /items/{id}`.
///
/// Every field defaults, and the stored row is overwritten with whatever
/// arrives: an omitted `name` stores `""`, an omitted `freezer_id` stores `0`,
/// omitted optional fields store `NULL`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateItem {
    pub name: String,
    pub category_id: Option<DbId>,
    pub freezer_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    pub frozen_date: Option<Timestamp>,
}

/// Response of `PUT /items/{id}`.
///
/// The stored row when the ID matched one, otherwise the payload echoed back
/// under the requested ID.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UpdatedItem {
    Stored(Item),
    Echoed {
        id: DbId,
        #[serde(flatten)]
        payload: UpdateItem,
    },
}

/// Body of `POST /items/consume`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsumeItemsRequest {
    #[serde(default)]
    pub delete_ids: Vec<DbId>,
}

/// Body of `POST /items/move`.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveItemsRequest {
    #[serde(default)]
    pub item_ids: Vec<DbId>,
    pub new_freezer_id: DbId,
}
