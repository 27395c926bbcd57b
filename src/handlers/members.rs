use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{Member, MemberPayload};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct MembersQuery {
    #[serde(rename = "groupId")]
    pub group_id: Option<i64>,
}

/// GET /members - list members, optionally scoped to one group via
/// `?groupId=`.
pub async fn members_get(
    State(state): State<AppState>,
    Query(query): Query<MembersQuery>,
) -> Result<Json<Vec<Member>>, ApiError> {
    let members = match query.group_id {
        Some(group_id) => state.supabase.select_eq("members", "group_id", group_id).await,
        None => state.supabase.select("members").await,
    }
    .map_err(|e| ApiError::upstream("Error fetching members", e))?;

    Ok(Json(members))
}

/// POST /members - create a member.
pub async fn member_post(
    State(state): State<AppState>,
    Json(payload): Json<MemberPayload>,
) -> Result<(StatusCode, Json<Member>), ApiError> {
    let member = state
        .supabase
        .insert("members", &payload)
        .await
        .map_err(|e| ApiError::upstream("Error adding member", e))?;

    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /members/:id - update a member, 404 when the id does not exist.
pub async fn member_put(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<MemberPayload>,
) -> Result<Json<Member>, ApiError> {
    let member = state
        .supabase
        .update("members", id, &payload)
        .await
        .map_err(|e| ApiError::upstream("Error updating member", e))?
        .ok_or_else(|| ApiError::not_found("Member not found"))?;

    Ok(Json(member))
}

/// DELETE /members/:id - delete a member.
pub async fn member_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .supabase
        .delete("members", id)
        .await
        .map_err(|e| ApiError::upstream("Error deleting member", e))?;

    Ok(StatusCode::NO_CONTENT)
}
