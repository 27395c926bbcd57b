// Identity-plane client: bearer-token introspection against /auth/v1/user.
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::{Supabase, SupabaseError};

/// Identity resolved by the external auth service for a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Supabase {
    /// Introspect a caller token. `Ok(None)` means the identity service
    /// rejected the token; `Err` means the check itself failed.
    pub async fn get_user(&self, token: &str) -> Result<Option<AuthUser>, SupabaseError> {
        let response = self
            .http
            .get(self.endpoint("auth/v1/user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SupabaseError::Auth {
                status: status.as_u16(),
                message: Self::upstream_message(response).await,
            });
        }

        Ok(Some(response.json::<AuthUser>().await?))
    }
}
