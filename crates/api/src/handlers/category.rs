//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use freezo_db::models::category::{Category, CreateCategory};
use freezo_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /api/categories
///
/// Name uniqueness is left to the store; a duplicate is a storage failure.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = category.id, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}
