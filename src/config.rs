use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Process configuration, read once in `main` and moved into the
/// application state. There is no global config singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the hosted Postgres service (data + identity planes).
    pub supabase_url: Url,
    /// Access key, sent as `apikey` and as the service bearer credential.
    pub supabase_anon_key: String,
    /// Listening port.
    pub port: u16,
}

impl AppConfig {
    /// Read configuration from the environment. `SUPABASE_URL` and
    /// `SUPABASE_ANON_KEY` are required; `PORT` defaults to 3000.
    pub fn from_env() -> Result<Self> {
        let raw_url = env::var("SUPABASE_URL").context("SUPABASE_URL is not set")?;
        let supabase_url = Url::parse(&raw_url)
            .with_context(|| format!("SUPABASE_URL is not a valid URL: {}", raw_url))?;

        let supabase_anon_key =
            env::var("SUPABASE_ANON_KEY").context("SUPABASE_ANON_KEY is not set")?;

        let port = match env::var("PORT") {
            Ok(v) => v
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {}", v))?,
            Err(_) => 3000,
        };

        Ok(Self {
            supabase_url,
            supabase_anon_key,
            port,
        })
    }
}
