use serde::{Deserialize, Serialize};

/// POST /api/posts body. The flags default to false when omitted; a
/// client-sent userId is ignored (the authenticated user wins).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostDTO {
    pub content: String,
    pub platform: String,
    pub tone: String,
    pub idea: Option<String>,
    #[serde(default)]
    pub has_emojis: bool,
    #[serde(default)]
    pub has_hashtags: bool,
    #[serde(default)]
    pub has_suggested_images: bool,
}

/// POST /api/generate-post body. Platform and tone are free-form strings on
/// the wire; the prompt builder only recognizes the documented values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePostRequest {
    pub idea: Option<String>,
    pub platform: String,
    pub tone: String,
    pub add_emojis: bool,
    pub add_hashtags: bool,
    pub suggest_images: bool,
}

/// POST /api/generate-post response; platform and tone echo the request.
#[derive(Debug, Serialize)]
pub struct GeneratedPostOut {
    pub content: String,
    pub platform: String,
    pub tone: String,
}
