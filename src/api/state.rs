//! Application state - Dependency injection container.
//!
//! Holds the services and infrastructure shared by every handler.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the SeaORM repository and user service over `database`.
    pub fn from_database(database: Arc<Database>) -> Self {
        let user_repo = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserManager::new(user_repo));

        Self {
            user_service,
            database,
        }
    }
}
