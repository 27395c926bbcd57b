use serde::{Deserialize, Serialize};

/// A user profile row as stored by the data service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub user_id: i64,
    pub introduction: Option<String>,
    pub courses: Option<Vec<String>>,
}

/// Create body for a user profile. Already snake_case on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilePayload {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<String>>,
}
