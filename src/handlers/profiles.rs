use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::ApiError;
use crate::models::{ProfilePayload, UserProfile};
use crate::AppState;

/// GET /user_profiles - list all profiles.
pub async fn profiles_get(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserProfile>>, ApiError> {
    let profiles = state
        .supabase
        .select("user_profiles")
        .await
        .map_err(|e| ApiError::upstream("Error fetching profiles", e))?;

    Ok(Json(profiles))
}

/// POST /user_profiles - create a profile for an existing user.
pub async fn profile_post(
    State(state): State<AppState>,
    Json(payload): Json<ProfilePayload>,
) -> Result<(StatusCode, Json<UserProfile>), ApiError> {
    let profile = state
        .supabase
        .insert("user_profiles", &payload)
        .await
        .map_err(|e| ApiError::upstream("Error creating profile", e))?;

    Ok((StatusCode::CREATED, Json(profile)))
}
