//! Handlers for the `/items` resource, including the batch endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use freezo_db::models::item::{
    ConsumeItemsRequest, Item, ItemInput, MoveItemsRequest, UpdateItem, UpdatedItem,
};
use freezo_db::repositories::ItemRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathId};
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Single-item CRUD
// ---------------------------------------------------------------------------

/// GET /api/items
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    let items = ItemRepo::list(&state.pool).await?;
    Ok(Json(items))
}

/// POST /api/items
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ItemInput>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let item = ItemRepo::create(&state.pool, &input).await?;
    tracing::info!(item_id = item.id, freezer_id = item.freezer_id, "Item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/items/{id}
///
/// Full replacement: omitted fields are overwritten with their empty value.
/// An unknown ID is not an error; the payload is echoed back.
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(input): JsonBody<UpdateItem>,
) -> AppResult<Json<UpdatedItem>> {
    let updated = match ItemRepo::update(&state.pool, id, &input).await? {
        Some(item) => UpdatedItem::Stored(item),
        None => {
            tracing::debug!(item_id = id, "Update matched no item");
            UpdatedItem::Echoed { id, payload: input }
        }
    };
    Ok(Json(updated))
}

/// DELETE /api/items/{id}
///
/// Succeeds whether or not the item existed.
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ItemRepo::delete(&state.pool, id).await?;
    tracing::debug!(item_id = id, deleted, "Item delete");
    Ok(Json(MessageResponse::new("deleted")))
}

// ---------------------------------------------------------------------------
// Batch operations (each one transaction)
// ---------------------------------------------------------------------------

/// POST /api/items/batch
pub async fn create_batch(
    State(state): State<AppState>,
    JsonBody(inputs): JsonBody<Vec<ItemInput>>,
) -> AppResult<(StatusCode, Json<Vec<Item>>)> {
    let items = ItemRepo::create_batch(&state.pool, &inputs).await?;
    tracing::info!(count = items.len(), "Item batch created");
    Ok((StatusCode::CREATED, Json(items)))
}

/// POST /api/items/consume
pub async fn consume(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ConsumeItemsRequest>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ItemRepo::delete_many(&state.pool, &input.delete_ids).await?;
    tracing::info!(
        requested = input.delete_ids.len(),
        deleted,
        "Item batch consumed"
    );
    Ok(Json(MessageResponse::new("batch consumed")))
}

/// POST /api/items/move
pub async fn move_items(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<MoveItemsRequest>,
) -> AppResult<Json<MessageResponse>> {
    if input.item_ids.is_empty() {
        return Err(AppError::BadRequest("No items to move".into()));
    }

    let moved =
        ItemRepo::move_to_freezer(&state.pool, &input.item_ids, input.new_freezer_id).await?;
    tracing::info!(
        moved,
        new_freezer_id = input.new_freezer_id,
        "Items moved"
    );
    Ok(Json(MessageResponse::new("items moved")))
}
