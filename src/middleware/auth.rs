use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::AppState;

/// Bearer-token authentication for guarded routes. Without a token the
/// request is rejected before any upstream call; with one, the external
/// identity service decides, and the resolved identity is injected into the
/// request for the handler.
pub async fn require_bearer(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers)
        .ok_or_else(|| ApiError::unauthorized("Unauthorized: No token provided"))?;

    let user = match state.supabase.get_user(&token).await {
        Ok(Some(user)) => user,
        Ok(None) => return Err(ApiError::unauthorized("Unauthorized: Invalid token")),
        Err(err) => {
            tracing::error!("Error verifying token: {}", err);
            return Err(ApiError::internal("Internal Server Error"));
        }
    };

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Pull the token out of `Authorization: Bearer <token>`.
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
