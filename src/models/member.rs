use serde::{Deserialize, Serialize};

/// A member row as stored by the data service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub major: Option<String>,
    pub email: Option<String>,
    pub introduction: Option<String>,
    pub courses: Option<Vec<String>>,
    pub group_id: Option<i64>,
}

/// Create/update body for a member. Incoming `groupId` maps to the stored
/// `group_id` column; optional fields are left untouched when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberPayload {
    pub name: String,
    pub major: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<String>>,
    #[serde(rename(deserialize = "groupId"), skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
}
