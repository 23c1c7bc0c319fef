// src/services/gemini_service.rs - Gemini generateContent client

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default API host; overridable so tests (and proxies) can redirect it.
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Model is pinned; the product tunes its prompts against this one.
const GEMINI_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("Gemini API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
    #[error("No content generated")]
    Empty,
}

/// Thin client over the generateContent REST endpoint. One attempt per
/// call: no retry, no backoff, and no client-side timeout, so a hung
/// upstream call hangs the request that triggered it.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiErrorBody {
    error: Option<GeminiErrorDetail>,
}

#[derive(Deserialize)]
struct GeminiErrorDetail {
    message: Option<String>,
}

/// Gemini error bodies look like `{"error":{"message":...}}`; prefer that
/// message, fall back to the raw body.
fn upstream_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<GeminiErrorBody>(body) {
        if let Some(message) = parsed.error.and_then(|e| e.message) {
            return message;
        }
    }
    body.to_string()
}

impl GeminiClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self {
            client,
            api_key,
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sends one prompt and returns the generated text, trimmed. A 2xx
    /// response with no candidate text is an error: the caller always
    /// expects content.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, GEMINI_MODEL, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        log::debug!("requesting {} completion ({} prompt bytes)", GEMINI_MODEL, prompt.len());

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = upstream_message(&body);
            log::error!("Gemini API request failed: {} - {}", status, message);
            return Err(GenerationError::Api { status, message });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        let text = parsed
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts)
            .map(|parts| {
                parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(GenerationError::Empty);
        }

        Ok(text.to_string())
    }
}
