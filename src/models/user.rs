use serde::{Deserialize, Serialize};

use crate::models::profile::UserProfile;

/// A user row as stored by the data service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub major: Option<String>,
    pub email: Option<String>,
}

/// Create/update body for a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub major: String,
    pub email: String,
}

/// A user with their profiles embedded, as returned by the data plane for
/// `select=*,user_profiles(*)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithProfiles {
    #[serde(flatten)]
    pub user: User,
    pub user_profiles: Vec<UserProfile>,
}
