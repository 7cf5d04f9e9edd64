//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use uuid::Uuid;

use crate::api::dto::CreateUpdateUserRequest;
use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/id/:id", get(get_user_by_id))
        .route("/email/:email", get(get_user_by_email))
        .route("/userslist", get(list_users))
        .route("/:id", put(update_user).delete(delete_user))
}

/// Interpret a route segment as a user id.
///
/// Anything that is not a UUID cannot name a stored user.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/user/id/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user, or null when no user has this id", body = User)
    )
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<User>>> {
    let Some(id) = parse_id(&id) else {
        return Ok(Json(None));
    };

    let user = state.user_service.find_by_id(id).await?;
    Ok(Json(user))
}

/// Get user by email
#[utoipa::path(
    get,
    path = "/user/email/{email}",
    tag = "Users",
    params(
        ("email" = String, Path, description = "User email address")
    ),
    responses(
        (status = 200, description = "The user, or null when no user has this email", body = User)
    )
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Option<User>>> {
    let user = state.user_service.find_by_email(&email).await?;
    Ok(Json(user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/user/userslist",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.find().await?;
    Ok(Json(users))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = CreateUpdateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUpdateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create(payload.into()).await?;

    tracing::info!(user_id = %user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace a user's name and email
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = CreateUpdateUserRequest,
    responses(
        (status = 204, description = "User updated successfully"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CreateUpdateUserRequest>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id).ok_or(AppError::NotFound)?;

    state.user_service.update(id, payload.into()).await?;

    tracing::info!(user_id = %id, "User updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 400, description = "User does not exist")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let Some(user_id) = parse_id(&id) else {
        return Err(AppError::bad_request(format!("User {} does not exist", id)));
    };

    state
        .user_service
        .delete(user_id)
        .await
        .map_err(|e| delete_rejection(e, &id))?;

    tracing::info!(user_id = %user_id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Map a failed delete onto the response it should produce.
///
/// Record-level rejections are the client's fault and become 400; store
/// failures stay server errors.
fn delete_rejection(err: AppError, id: &str) -> AppError {
    match err {
        AppError::NotFound => AppError::bad_request(format!("User {} does not exist", id)),
        AppError::ConstraintViolation(_) => {
            AppError::bad_request(format!("User {} cannot be deleted", id))
        }
        AppError::Validation(_) | AppError::BadRequest(_) => err,
        AppError::Database(_) | AppError::Internal(_) => err,
    }
}
