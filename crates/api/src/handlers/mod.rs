//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `freezo_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod category;
pub mod freezer;
pub mod item;
