use anyhow::{Context, Result};

use roster_api::config::AppConfig;
use roster_api::supabase::Supabase;
use roster_api::{app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present so cargo run picks up SUPABASE_URL and friends.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("roster_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState {
        supabase: Supabase::new(&config),
    };

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("listening on http://{}", bind_addr);
    println!("🚀 Roster API server listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.context("server")?;

    Ok(())
}
