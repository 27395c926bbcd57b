use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::models::Group;
use crate::AppState;

/// GET /groups - list all groups.
pub async fn groups_get(State(state): State<AppState>) -> Result<Json<Vec<Group>>, ApiError> {
    let groups = state
        .supabase
        .select("groups")
        .await
        .map_err(|e| ApiError::upstream("Error fetching groups", e))?;

    Ok(Json(groups))
}

/// GET /groups/:id - fetch a single group, 404 when the id does not exist.
pub async fn group_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Group>, ApiError> {
    let group = state
        .supabase
        .select_one("groups", id)
        .await
        .map_err(|e| ApiError::upstream("Error fetching group", e))?
        .ok_or_else(|| ApiError::not_found("Group not found"))?;

    Ok(Json(group))
}
