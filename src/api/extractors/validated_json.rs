//! Validated JSON extractor - Combines field allow-listing, deserialization
//! and validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::errors::AppError;

/// Declares the complete set of fields a request body may carry.
///
/// Bodies containing any other top-level field are rejected before
/// deserialization.
pub trait KnownFields {
    const FIELDS: &'static [&'static str];
}

/// Validated JSON extractor that automatically validates requests.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use user_api::api::extractors::{KnownFields, ValidatedJson};
///
/// #[derive(Deserialize, Validate)]
/// struct RenameRequest {
///     #[validate(length(min = 5))]
///     name: String,
/// }
///
/// impl KnownFields for RenameRequest {
///     const FIELDS: &'static [&'static str] = &["name"];
/// }
///
/// async fn rename(ValidatedJson(payload): ValidatedJson<RenameRequest>) {
///     // payload has no unknown fields and passed validation
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + KnownFields,
    Json<Value>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        reject_unknown_fields(&raw, T::FIELDS)?;

        let value: T = serde_json::from_value(raw)
            .map_err(|e| AppError::validation(e.to_string()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Fail when `raw` is not an object or has a key outside `allowed`.
fn reject_unknown_fields(raw: &Value, allowed: &[&str]) -> Result<(), AppError> {
    let object = raw
        .as_object()
        .ok_or_else(|| AppError::validation("Request body must be a JSON object"))?;

    let mut unknown: Vec<String> = object
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .map(|key| format!("property {} should not exist", key))
        .collect();

    if unknown.is_empty() {
        return Ok(());
    }

    unknown.sort();
    tracing::debug!("Rejected request body with unknown fields: {:?}", unknown);
    Err(AppError::validation(unknown.join(", ")))
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();

    // HashMap iteration order is unstable
    messages.sort();
    messages.join(", ")
}
