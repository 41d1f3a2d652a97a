//! Handlers for the `/freezers` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use freezo_core::error::CoreError;
use freezo_core::validation::validate_name;
use freezo_db::models::freezer::{CreateFreezer, Freezer, FreezerDeletion};
use freezo_db::repositories::FreezerRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathId};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/freezers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Freezer>>> {
    let freezers = FreezerRepo::list(&state.pool).await?;
    Ok(Json(freezers))
}

/// POST /api/freezers
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateFreezer>,
) -> AppResult<(StatusCode, Json<Freezer>)> {
    validate_name("Freezer", &input.name)?;

    let freezer = FreezerRepo::create(&state.pool, &input).await?;
    tracing::info!(freezer_id = freezer.id, "Freezer created");

    Ok((StatusCode::CREATED, Json(freezer)))
}

/// DELETE /api/freezers/{id}
///
/// Refused with 409 while any item still references the freezer.
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<MessageResponse>> {
    match FreezerRepo::delete_if_empty(&state.pool, id).await? {
        FreezerDeletion::Deleted => {
            tracing::info!(freezer_id = id, "Freezer deleted");
            Ok(Json(MessageResponse::new("deleted")))
        }
        FreezerDeletion::HasItems => {
            tracing::warn!(freezer_id = id, "Refused to delete non-empty freezer");
            Err(AppError::Core(CoreError::Conflict(
                "Cannot delete freezer with items".into(),
            )))
        }
    }
}
