use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when storage is unreachable or not bootstrapped.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Latest applied migration; `null` when unknown.
    pub schema_version: Option<i64>,
    pub journal_mode: Option<String>,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage = match freezo_db::storage_status(&state.pool).await {
        Ok(storage) => Some(storage),
        Err(err) => {
            tracing::warn!(error = %err, "Storage status query failed");
            None
        }
    };

    let db_healthy = storage.is_some();
    let schema_version = storage.as_ref().and_then(|s| s.schema_version);
    let status = if schema_version.is_some() {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_version,
        journal_mode: storage.map(|s| s.journal_mode),
    })
}

/// Root-level routes, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
