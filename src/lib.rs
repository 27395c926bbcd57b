pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod supabase;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::supabase::Supabase;

/// Shared application state. The outbound client handle is constructed once
/// at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub supabase: Supabase,
}

/// Build the full route table. Every endpoint lives here; only the joined
/// users+profiles read sits behind the bearer middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(group_routes())
        .merge(member_routes())
        .merge(user_routes(state.clone()))
        .merge(profile_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn group_routes() -> Router<AppState> {
    use handlers::groups;

    Router::new()
        .route("/groups", get(groups::groups_get))
        .route("/groups/:id", get(groups::group_get))
}

fn member_routes() -> Router<AppState> {
    use handlers::members;

    Router::new()
        .route("/members", get(members::members_get).post(members::member_post))
        .route(
            "/members/:id",
            put(members::member_put).delete(members::member_delete),
        )
}

fn user_routes(state: AppState) -> Router<AppState> {
    use handlers::users;

    Router::new()
        // Joined read, the only authenticated route
        .route(
            "/users/profiles",
            get(users::users_profiles_get).layer(axum::middleware::from_fn_with_state(
                state,
                middleware::require_bearer,
            )),
        )
        .route("/users", get(users::users_get).post(users::user_post))
        .route("/users/:id", put(users::user_put).delete(users::user_delete))
}

fn profile_routes() -> Router<AppState> {
    use handlers::profiles;

    Router::new().route(
        "/user_profiles",
        get(profiles::profiles_get).post(profiles::profile_post),
    )
}

async fn root() -> &'static str {
    "API is running!"
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.supabase.health().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "upstream": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "upstream_error": e.to_string()
            })),
        ),
    }
}
