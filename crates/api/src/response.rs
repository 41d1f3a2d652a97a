//! Shared response bodies for API handlers.

use serde::Serialize;

/// `{ "message": ... }` body returned by operations that have no entity to
/// echo back (deletes, consume, move).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}
