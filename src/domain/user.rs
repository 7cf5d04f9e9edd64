//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User domain entity
///
/// Serializes as `{"id", "name", "email"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique user identifier, assigned on creation
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// User display name
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// User email address (unique)
    #[schema(example = "jane@example.com")]
    pub email: String,
}

impl User {
    pub fn new(id: Uuid, name: String, email: String) -> Self {
        Self { id, name, email }
    }
}

/// Writable user fields accepted by the service layer.
///
/// Carries no `id`: identifiers only ever come from the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
    pub email: String,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
