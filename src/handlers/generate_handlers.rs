// src/handlers/generate_handlers.rs - AI content generation

use actix_web::{post, web, HttpResponse};

use crate::dtos::post_dtos::{GeneratePostRequest, GeneratedPostOut};
use crate::error::ApiError;
use crate::services::prompt_builder::build_prompt;
use crate::AppState;

/// Generates post copy for the requested platform and tone. Nothing is
/// stored here; the client decides whether to save the result.
#[post("/generate-post")]
pub async fn generate_post(
    app_state: web::Data<AppState>,
    body: web::Json<GeneratePostRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    let prompt = build_prompt(&request);

    let content = app_state.gemini.generate(&prompt).await?;

    Ok(HttpResponse::Ok().json(GeneratedPostOut {
        content,
        platform: request.platform,
        tone: request.tone,
    }))
}
