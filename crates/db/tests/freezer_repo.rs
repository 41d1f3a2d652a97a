//! Freezer persistence and the delete-only-when-empty rule.

mod common;

use freezo_db::models::freezer::FreezerDeletion;
use freezo_db::repositories::{FreezerRepo, ItemRepo};

#[tokio::test]
async fn test_created_freezer_is_listed() {
    let db = common::test_db().await;

    let freezer = common::create_freezer(&db.pool, "Kitchen").await;
    assert!(freezer.id > 0);
    assert_eq!(freezer.name, "Kitchen");

    let freezers = FreezerRepo::list(&db.pool).await.unwrap();
    assert!(freezers
        .iter()
        .any(|f| f.id == freezer.id && f.name == "Kitchen"));
}

#[tokio::test]
async fn test_freezer_names_need_not_be_unique() {
    let db = common::test_db().await;

    let a = common::create_freezer(&db.pool, "Chest").await;
    let b = common::create_freezer(&db.pool, "Chest").await;

    assert_ne!(a.id, b.id);
    assert_eq!(FreezerRepo::list(&db.pool).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_freezer_with_items_is_refused() {
    let db = common::test_db().await;
    let freezer = common::create_freezer(&db.pool, "Full").await;
    ItemRepo::create(&db.pool, &common::new_item("Peas", freezer.id))
        .await
        .unwrap();

    let outcome = FreezerRepo::delete_if_empty(&db.pool, freezer.id)
        .await
        .unwrap();

    assert_eq!(outcome, FreezerDeletion::HasItems);
    assert!(FreezerRepo::find_by_id(&db.pool, freezer.id)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_delete_freezer_with_items_is_refused_without_foreign_keys() {
    let db = common::test_db_with(|config| config.enforce_foreign_keys = false).await;
    let freezer = common::create_freezer(&db.pool, "Full").await;
    ItemRepo::create(&db.pool, &common::new_item("Peas", freezer.id))
        .await
        .unwrap();

    let outcome = FreezerRepo::delete_if_empty(&db.pool, freezer.id)
        .await
        .unwrap();

    assert_eq!(outcome, FreezerDeletion::HasItems);
    assert_eq!(FreezerRepo::list(&db.pool).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_empty_freezer() {
    let db = common::test_db().await;
    let freezer = common::create_freezer(&db.pool, "Empty").await;

    let outcome = FreezerRepo::delete_if_empty(&db.pool, freezer.id)
        .await
        .unwrap();

    assert_eq!(outcome, FreezerDeletion::Deleted);
    let freezers = FreezerRepo::list(&db.pool).await.unwrap();
    assert!(freezers.iter().all(|f| f.id != freezer.id));
}

#[tokio::test]
async fn test_delete_freezer_after_items_removed() {
    let db = common::test_db().await;
    let freezer = common::create_freezer(&db.pool, "Drained").await;
    let item = ItemRepo::create(&db.pool, &common::new_item("Fish", freezer.id))
        .await
        .unwrap();

    ItemRepo::delete(&db.pool, item.id).await.unwrap();

    let outcome = FreezerRepo::delete_if_empty(&db.pool, freezer.id)
        .await
        .unwrap();
    assert_eq!(outcome, FreezerDeletion::Deleted);
}

#[tokio::test]
async fn test_delete_unknown_freezer_succeeds() {
    let db = common::test_db().await;

    let outcome = FreezerRepo::delete_if_empty(&db.pool, 424242)
        .await
        .unwrap();
    assert_eq!(outcome, FreezerDeletion::Deleted);
}
