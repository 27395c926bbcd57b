use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::error::ApiError;
use crate::models::{User, UserPayload, UserWithProfiles};
use crate::supabase::AuthUser;
use crate::AppState;

/// GET /users - list all users.
pub async fn users_get(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .supabase
        .select("users")
        .await
        .map_err(|e| ApiError::upstream("Error fetching users", e))?;

    Ok(Json(users))
}

/// POST /users - create a user.
pub async fn user_post(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state
        .supabase
        .insert("users", &payload)
        .await
        .map_err(|e| ApiError::upstream("Error creating user", e))?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/:id - update a user, 404 when the id does not exist.
pub async fn user_put(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .supabase
        .update("users", id, &payload)
        .await
        .map_err(|e| ApiError::upstream("Error updating user", e))?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(user))
}

/// DELETE /users/:id - delete a user.
pub async fn user_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .supabase
        .delete("users", id)
        .await
        .map_err(|e| ApiError::upstream("Error deleting user", e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /users/profiles - every user joined with their profiles. Guarded by
/// the bearer middleware, which resolves the caller identity.
pub async fn users_profiles_get(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> Result<Json<Vec<UserWithProfiles>>, ApiError> {
    tracing::debug!("user profiles requested by {}", caller.id);

    let users = state
        .supabase
        .select_with("users", "*,user_profiles(*)")
        .await
        .map_err(|e| ApiError::upstream("Error fetching user profiles", e))?;

    Ok(Json(users))
}
