use serde::{Deserialize, Serialize};

/// A group row as stored by the data service. Read-only through the
/// gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
}
