//! Repository contract tests against a real (in-memory SQLite) store.

mod common;

use uuid::Uuid;

use user_api::errors::AppError;
use user_api::infra::{UserRepository, UserStore};

async fn store() -> UserStore {
    let db = common::setup_database().await;
    UserStore::new(db.get_connection())
}

#[tokio::test]
async fn test_find_users_empty() {
    let repo = store().await;

    let users = repo.find_users().await.unwrap();

    assert!(users.is_empty());
}

#[tokio::test]
async fn test_create_then_find_by_id_and_email() {
    let repo = store().await;
    let email = common::unique_email();

    let created = repo
        .create("Test User".to_string(), email.clone())
        .await
        .unwrap();

    assert!(!created.id.is_nil());

    let by_id = repo.find_user_by_id(created.id).await.unwrap();
    assert_eq!(by_id.as_ref(), Some(&created));

    let by_email = repo.find_user_by_email(&email).await.unwrap();
    assert_eq!(by_email, Some(created));
}

#[tokio::test]
async fn test_lookups_return_none_when_absent() {
    let repo = store().await;

    assert!(repo.find_user_by_id(Uuid::new_v4()).await.unwrap().is_none());
    assert!(repo
        .find_user_by_email("nobody@test.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_create_duplicate_email_is_constraint_violation() {
    let repo = store().await;
    let email = common::unique_email();

    repo.create("User One".to_string(), email.clone())
        .await
        .unwrap();
    let result = repo.create("User Two".to_string(), email).await;

    assert!(matches!(result, Err(AppError::ConstraintViolation(_))));
    assert_eq!(repo.find_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_id() {
    let repo = store().await;
    let created = repo
        .create("Initial Name".to_string(), common::unique_email())
        .await
        .unwrap();
    let new_email = common::unique_email();

    let updated = repo
        .update(created.id, "Updated Name".to_string(), new_email.clone())
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Updated Name");
    assert_eq!(updated.email, new_email);

    let stored = repo.find_user_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let repo = store().await;

    let result = repo
        .update(Uuid::new_v4(), "Updated Name".to_string(), common::unique_email())
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_update_to_taken_email_is_constraint_violation() {
    let repo = store().await;
    let taken = common::unique_email();
    repo.create("User One".to_string(), taken.clone())
        .await
        .unwrap();
    let second = repo
        .create("User Two".to_string(), common::unique_email())
        .await
        .unwrap();

    let result = repo.update(second.id, "User Two".to_string(), taken).await;

    assert!(matches!(result, Err(AppError::ConstraintViolation(_))));
}

#[tokio::test]
async fn test_update_keeping_own_email_succeeds() {
    let repo = store().await;
    let email = common::unique_email();
    let created = repo
        .create("Test User".to_string(), email.clone())
        .await
        .unwrap();

    let updated = repo
        .update(created.id, "Renamed User".to_string(), email)
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed User");
}

#[tokio::test]
async fn test_delete_removes_record() {
    let repo = store().await;
    let created = repo
        .create("Test User".to_string(), common::unique_email())
        .await
        .unwrap();

    repo.delete(created.id).await.unwrap();

    assert!(repo.find_user_by_id(created.id).await.unwrap().is_none());
    assert!(repo.find_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_user_is_not_found() {
    let repo = store().await;

    let result = repo.delete(Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}
