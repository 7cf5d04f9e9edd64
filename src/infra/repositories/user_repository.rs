//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Entity name reported when the email uniqueness rule is violated
const EMAIL_CONSTRAINT: &str = "Email";

/// User repository trait for dependency injection.
///
/// Lookups report a missing record as `Ok(None)`; writes addressed at a
/// missing record fail with [`AppError::NotFound`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every stored user
    async fn find_users(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_user_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a new user under a freshly generated id
    async fn create(&self, name: String, email: String) -> AppResult<User>;

    /// Replace name and email of an existing user
    async fn update(&self, id: Uuid, name: String, email: String) -> AppResult<User>;

    /// Permanently delete user by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_users(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_user_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, name: String, email: String) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            email: Set(email),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_store(e, EMAIL_CONSTRAINT))?;

        tracing::debug!(user_id = %model.id, "User created");
        Ok(User::from(model))
    }

    async fn update(&self, id: Uuid, name: String, email: String) -> AppResult<User> {
        let existing = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(name);
        active.email = Set(email);

        let model = active.update(&self.db).await.map_err(|e| match e {
            // Row vanished between the lookup and the write
            DbErr::RecordNotUpdated => AppError::NotFound,
            other => AppError::from_store(other, EMAIL_CONSTRAINT),
        })?;

        tracing::debug!(user_id = %model.id, "User updated");
        Ok(User::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        tracing::debug!(user_id = %id, "User deleted");
        Ok(())
    }
}
