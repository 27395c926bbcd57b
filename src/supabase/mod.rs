pub mod auth;
pub mod error;
pub mod rest;

pub use auth::AuthUser;
pub use error::SupabaseError;

use crate::config::AppConfig;
use url::Url;

/// Handle to the hosted Postgres service: one reqwest client shared by the
/// data plane (`/rest/v1`) and the identity plane (`/auth/v1`).
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct Supabase {
    http: reqwest::Client,
    base_url: Url,
    anon_key: String,
}

impl Supabase {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.supabase_url.clone(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}
