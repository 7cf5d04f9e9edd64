//! Request bodies accepted by the HTTP layer.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::KnownFields;
use crate::domain::UserInput;

/// Body for creating or replacing a user.
///
/// Only `name` and `email` are accepted; anything else (including `id`)
/// fails the request with 400.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUpdateUserRequest {
    /// User display name (5 to 100 characters)
    #[validate(length(min = 5, max = 100, message = "name must be between 5 and 100 characters"))]
    #[schema(example = "Jane Doe", min_length = 5, max_length = 100)]
    pub name: String,
    /// User email address
    #[validate(length(min = 1, message = "email should not be empty"))]
    #[schema(example = "jane@example.com", min_length = 1)]
    pub email: String,
}

impl KnownFields for CreateUpdateUserRequest {
    const FIELDS: &'static [&'static str] = &["name", "email"];
}

impl From<CreateUpdateUserRequest> for UserInput {
    fn from(body: CreateUpdateUserRequest) -> Self {
        UserInput {
            name: body.name,
            email: body.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str) -> CreateUpdateUserRequest {
        CreateUpdateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_valid_body() {
        assert!(request("Test User", "test@example.com").validate().is_ok());
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(request("", "test@example.com").validate().is_err());
        assert!(request("Abcd", "test@example.com").validate().is_err());
        assert!(request("Abcde", "test@example.com").validate().is_ok());
        assert!(request(&"a".repeat(100), "test@example.com").validate().is_ok());
        assert!(request(&"a".repeat(101), "test@example.com").validate().is_err());
    }

    #[test]
    fn test_name_length_counts_characters() {
        // Five characters, ten bytes
        assert!(request("ééééé", "test@example.com").validate().is_ok());
    }

    #[test]
    fn test_empty_email_rejected() {
        assert!(request("Test User", "").validate().is_err());
    }

    #[test]
    fn test_unknown_fields_still_deserialize_without_allow_list() {
        // serde ignores extra keys; the extractor's allow-list is what rejects them
        let body: CreateUpdateUserRequest = serde_json::from_value(serde_json::json!({
            "id": "x",
            "name": "Test User",
            "email": "test@example.com"
        }))
        .unwrap();
        assert_eq!(UserInput::from(body), UserInput::new("Test User", "test@example.com"));
    }
}
