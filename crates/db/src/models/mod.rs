//! Database row structs and request DTOs.

pub mod category;
pub mod freezer;
pub mod item;
