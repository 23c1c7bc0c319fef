use serde::{Deserialize, Serialize};

/// Saved post. The three `has_*` flags record which prompt features were
/// requested when the content was generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub content: String,
    pub platform: String,
    pub tone: String,
    pub idea: Option<String>,
    pub has_emojis: bool,
    pub has_hashtags: bool,
    pub has_suggested_images: bool,
    pub created_at: String,
}

/// Insert shape; id and created_at are assigned by the store. The handler
/// fills `user_id` from the authenticated user, never from the request body.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: i32,
    pub content: String,
    pub platform: String,
    pub tone: String,
    pub idea: Option<String>,
    pub has_emojis: bool,
    pub has_hashtags: bool,
    pub has_suggested_images: bool,
}
