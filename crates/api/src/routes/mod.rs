pub mod health;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /freezers                 list, create
/// /freezers/{id}            delete (409 while items remain)
///
/// /items                    list, create
/// /items/batch              create many (POST, atomic)
/// /items/consume            delete many (POST, atomic)
/// /items/move               reassign freezer (POST, atomic)
/// /items/{id}               update (PUT), delete
///
/// /categories               list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Freezers
        .route(
            "/freezers",
            get(handlers::freezer::list).post(handlers::freezer::create),
        )
        .route("/freezers/{id}", delete(handlers::freezer::delete))
        // Items
        .route(
            "/items",
            get(handlers::item::list).post(handlers::item::create),
        )
        .route("/items/batch", post(handlers::item::create_batch))
        .route("/items/consume", post(handlers::item::consume))
        .route("/items/move", post(handlers::item::move_items))
        .route(
            "/items/{id}",
            put(handlers::item::update).delete(handlers::item::delete),
        )
        // Categories
        .route(
            "/categories",
            get(handlers::category::list).post(handlers::category::create),
        )
}
