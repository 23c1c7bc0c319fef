use serde::{Deserialize, Serialize};

/// Registered user, keyed by the Firebase UID the client forwards.
/// `created_at` is an RFC 3339 UTC string so the web client can compare
/// it the same way it compares post timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub firebase_uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: String,
}

/// Insert shape; id and created_at are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub firebase_uid: String,
    pub email: String,
    pub display_name: Option<String>,
}
