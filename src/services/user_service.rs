//! User service - Adapts request payloads to repository calls.
//!
//! SOLID (SRP): Handles user-related use cases only.
//! SOLID (DIP): Depends on the `UserRepository` trait, not on SeaORM.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{User, UserInput};
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
///
/// Every method forwards to the repository; results and failures are
/// propagated unchanged.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn find(&self) -> AppResult<Vec<User>>;

    /// Get user by ID, `None` when absent
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Get user by email, `None` when absent
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a new user
    async fn create(&self, payload: UserInput) -> AppResult<User>;

    /// Replace name and email of the user identified by `id`
    async fn update(&self, id: Uuid, patch: UserInput) -> AppResult<User>;

    /// Permanently delete a user
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn find(&self) -> AppResult<Vec<User>> {
        self.repo.find_users().await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        self.repo.find_user_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.repo.find_user_by_email(email).await
    }

    async fn create(&self, payload: UserInput) -> AppResult<User> {
        let UserInput { name, email } = payload;
        self.repo.create(name, email).await
    }

    async fn update(&self, id: Uuid, patch: UserInput) -> AppResult<User> {
        let UserInput { name, email } = patch;
        self.repo.update(id, name, email).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
