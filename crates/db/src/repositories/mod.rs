//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. Operations touching more
//! than one row run inside a single transaction.

pub mod category_repo;
pub mod freezer_repo;
pub mod item_repo;

pub use category_repo::CategoryRepo;
pub use freezer_repo::FreezerRepo;
pub use item_repo::ItemRepo;
