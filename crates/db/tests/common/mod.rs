//! Shared setup for storage integration tests.
//!
//! Every test gets its own database file inside a temporary directory. The
//! directory is removed when the returned [`TestDb`] is dropped.

#![allow(dead_code)]

use freezo_db::models::freezer::{CreateFreezer, Freezer};
use freezo_db::models::item::{ItemInput, UpdateItem};
use freezo_db::repositories::FreezerRepo;
use freezo_db::{DbConfig, DbPool};
use tempfile::TempDir;

pub struct TestDb {
    pub pool: DbPool,
    pub config: DbConfig,
    _dir: TempDir,
}

/// Create a fresh database file and open a pool over it without running
/// migrations. `configure` adjusts the default settings before the pool
/// opens.
pub async fn empty_db_with(configure: impl FnOnce(&mut DbConfig)) -> TestDb {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut config = DbConfig::for_path(dir.path().join("freezer.db"));
    configure(&mut config);
    let pool = freezo_db::create_pool(&config)
        .await
        .expect("open test database");
    TestDb {
        pool,
        config,
        _dir: dir,
    }
}

/// Create a fresh, fully bootstrapped database.
pub async fn test_db() -> TestDb {
    test_db_with(|_| {}).await
}

/// Bootstrapped database opened with adjusted settings.
pub async fn test_db_with(configure: impl FnOnce(&mut DbConfig)) -> TestDb {
    let db = empty_db_with(configure).await;
    freezo_db::bootstrap(&db.pool)
        .await
        .expect("bootstrap test database");
    db
}

pub async fn create_freezer(pool: &DbPool, name: &str) -> Freezer {
    FreezerRepo::create(
        pool,
        &CreateFreezer {
            name: name.to_string(),
        },
    )
    .await
    .expect("create freezer")
}

pub fn new_item(name: &str, freezer_id: i64) -> ItemInput {
    ItemInput {
        name: name.to_string(),
        category_id: None,
        freezer_id,
        weight: None,
        frozen_date: None,
    }
}

pub fn item_update(name: &str, freezer_id: i64) -> UpdateItem {
    UpdateItem {
        name: name.to_string(),
        freezer_id,
        ..UpdateItem::default()
    }
}
