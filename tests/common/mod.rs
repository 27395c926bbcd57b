#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use roster_api::config::AppConfig;
use roster_api::supabase::Supabase;
use roster_api::{app, AppState};

/// Token the mock identity service accepts.
pub const GOOD_TOKEN: &str = "valid-test-token";

/// In-memory stand-in for the hosted Postgres service: a PostgREST-shaped
/// data plane over HashMap tables plus a single-token identity plane.
/// Tracks data-plane hits and can be switched into a failure mode.
#[derive(Clone, Default)]
pub struct MockUpstream {
    inner: Arc<MockInner>,
}

#[derive(Default)]
struct MockInner {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    rest_hits: AtomicUsize,
    fail: AtomicBool,
}

impl MockUpstream {
    pub fn seed(&self, table: &str, rows: Vec<Value>) {
        self.inner
            .tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .extend(rows);
    }

    /// When set, every data-plane call fails with a 500.
    pub fn set_fail(&self, fail: bool) {
        self.inner.fail.store(fail, Ordering::SeqCst);
    }

    /// Number of data-plane (table) requests seen so far.
    pub fn rest_hits(&self) -> usize {
        self.inner.rest_hits.load(Ordering::SeqCst)
    }

    fn router(&self) -> Router {
        Router::new()
            .route("/auth/v1/user", get(auth_user))
            .route("/rest/v1", get(rest_root))
            .route(
                "/rest/v1/:table",
                get(rest_select)
                    .post(rest_insert)
                    .patch(rest_update)
                    .delete(rest_delete),
            )
            .with_state(self.clone())
    }
}

async fn auth_user(headers: HeaderMap) -> Response {
    let expected = format!("Bearer {}", GOOD_TOKEN);
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == expected)
        .unwrap_or(false);

    if authorized {
        Json(json!({
            "id": "4f1f2c7e-0000-4000-8000-000000000001",
            "email": "tester@example.com",
            "role": "authenticated"
        }))
        .into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "message": "invalid JWT" }))).into_response()
    }
}

async fn rest_root() -> Response {
    Json(json!({})).into_response()
}

fn simulated_failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "simulated upstream failure" })),
    )
        .into_response()
}

fn value_matches(have: &Value, want: &str) -> bool {
    match have.as_i64() {
        Some(n) => want.parse::<i64>() == Ok(n),
        None => have.as_str() == Some(want),
    }
}

fn apply_filters(rows: Vec<Value>, params: &HashMap<String, String>) -> Vec<Value> {
    rows.into_iter()
        .filter(|row| {
            params
                .iter()
                .filter(|(k, _)| k.as_str() != "select")
                .all(|(k, v)| match v.strip_prefix("eq.") {
                    Some(want) => row.get(k).map(|have| value_matches(have, want)).unwrap_or(false),
                    None => true,
                })
        })
        .collect()
}

async fn rest_select(
    State(state): State<MockUpstream>,
    Path(table): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.inner.rest_hits.fetch_add(1, Ordering::SeqCst);
    if state.inner.fail.load(Ordering::SeqCst) {
        return simulated_failure();
    }

    let tables = state.inner.tables.lock().unwrap();
    let rows = tables.get(&table).cloned().unwrap_or_default();
    let mut rows = apply_filters(rows, &params);

    // Embedded resource select, e.g. users?select=*,user_profiles(*)
    if params
        .get("select")
        .map(|s| s.contains("user_profiles("))
        .unwrap_or(false)
    {
        let profiles = tables.get("user_profiles").cloned().unwrap_or_default();
        for row in &mut rows {
            let id = row.get("id").and_then(Value::as_i64);
            let embedded: Vec<Value> = profiles
                .iter()
                .filter(|p| p.get("user_id").and_then(Value::as_i64) == id)
                .cloned()
                .collect();
            row["user_profiles"] = Value::Array(embedded);
        }
    }

    Json(rows).into_response()
}

async fn rest_insert(
    State(state): State<MockUpstream>,
    Path(table): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    state.inner.rest_hits.fetch_add(1, Ordering::SeqCst);
    if state.inner.fail.load(Ordering::SeqCst) {
        return simulated_failure();
    }

    let incoming = match body {
        Value::Array(rows) => rows,
        other => vec![other],
    };

    let mut tables = state.inner.tables.lock().unwrap();
    let rows = tables.entry(table).or_default();
    let mut inserted = Vec::new();
    for mut row in incoming {
        let next_id = rows
            .iter()
            .filter_map(|r| r.get("id").and_then(Value::as_i64))
            .max()
            .unwrap_or(0)
            + 1;
        row["id"] = json!(next_id);
        rows.push(row.clone());
        inserted.push(row);
    }

    (StatusCode::CREATED, Json(inserted)).into_response()
}

async fn rest_update(
    State(state): State<MockUpstream>,
    Path(table): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    state.inner.rest_hits.fetch_add(1, Ordering::SeqCst);
    if state.inner.fail.load(Ordering::SeqCst) {
        return simulated_failure();
    }

    let mut tables = state.inner.tables.lock().unwrap();
    let rows = tables.entry(table).or_default();
    let mut updated = Vec::new();
    for row in rows.iter_mut() {
        let matched = params
            .iter()
            .all(|(k, v)| match v.strip_prefix("eq.") {
                Some(want) => row.get(k).map(|have| value_matches(have, want)).unwrap_or(false),
                None => true,
            });
        if matched {
            if let (Value::Object(target), Value::Object(patch)) = (&mut *row, &body) {
                for (k, v) in patch {
                    target.insert(k.clone(), v.clone());
                }
            }
            updated.push(row.clone());
        }
    }

    Json(updated).into_response()
}

async fn rest_delete(
    State(state): State<MockUpstream>,
    Path(table): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.inner.rest_hits.fetch_add(1, Ordering::SeqCst);
    if state.inner.fail.load(Ordering::SeqCst) {
        return simulated_failure();
    }

    let mut tables = state.inner.tables.lock().unwrap();
    let rows = tables.entry(table).or_default();
    rows.retain(|row| {
        !params.iter().all(|(k, v)| match v.strip_prefix("eq.") {
            Some(want) => row.get(k).map(|have| value_matches(have, want)).unwrap_or(false),
            None => true,
        })
    });

    StatusCode::NO_CONTENT.into_response()
}

/// A gateway bound to an ephemeral port, wired to its own mock upstream.
pub struct TestServer {
    pub base_url: String,
    pub upstream: MockUpstream,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Boot a mock upstream and a gateway pointed at it. Each test gets an
/// isolated pair, so suites can mutate tables and toggle failures freely.
pub async fn spawn_gateway() -> Result<TestServer> {
    let upstream = MockUpstream::default();

    let upstream_listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let upstream_addr = upstream_listener.local_addr()?;
    let upstream_router = upstream.router();
    tokio::spawn(async move {
        axum::serve(upstream_listener, upstream_router).await.unwrap();
    });

    let config = AppConfig {
        supabase_url: url::Url::parse(&format!("http://{}", upstream_addr))?,
        supabase_anon_key: "test-anon-key".to_string(),
        port: 0,
    };
    let state = AppState {
        supabase: Supabase::new(&config),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let router = app(state);
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        upstream,
        client: reqwest::Client::new(),
    })
}
