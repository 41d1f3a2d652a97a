//! Input validation shared by the API handlers.

use crate::error::CoreError;

/// Validate that a display name is present.
///
/// Names are stored exactly as submitted; only empty or whitespace-only
/// values are rejected.
pub fn validate_name(entity: &str, name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "{entity} name must not be empty"
        )));
    }
    Ok(())
}
