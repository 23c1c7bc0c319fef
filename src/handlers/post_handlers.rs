// src/handlers/post_handlers.rs - per-user post CRUD

use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};

use crate::dtos::post_dtos::CreatePostDTO;
use crate::error::ApiError;
use crate::middleware::auth_extractor::{firebase_uid_from, FirebaseUser};
use crate::models::post::NewPost;
use crate::models::user::User;
use crate::AppState;

#[derive(serde::Serialize)]
struct DeletedOut {
    message: &'static str,
}

fn resolve_user(app_state: &AppState, uid: &str) -> Result<User, ApiError> {
    app_state
        .storage
        .get_user_by_firebase_uid(uid)
        .ok_or(ApiError::UserNotFound)
}

#[get("/posts")]
pub async fn list_posts(
    app_state: web::Data<AppState>,
    user: FirebaseUser,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&app_state, &user.uid)?;
    let posts = app_state.storage.get_user_posts(user.id);

    Ok(HttpResponse::Ok().json(posts))
}

/// The post is always attributed to the authenticated user; any userId in
/// the body is ignored along with other unknown fields.
#[post("/posts")]
pub async fn create_post(
    app_state: web::Data<AppState>,
    user: FirebaseUser,
    body: web::Json<CreatePostDTO>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&app_state, &user.uid)?;
    let body = body.into_inner();

    let post = app_state.storage.create_post(NewPost {
        user_id: user.id,
        content: body.content,
        platform: body.platform,
        tone: body.tone,
        idea: body.idea,
        has_emojis: body.has_emojis,
        has_hashtags: body.has_hashtags,
        has_suggested_images: body.has_suggested_images,
    });

    Ok(HttpResponse::Ok().json(post))
}

/// Reports success whether or not a post was removed, so repeated deletes
/// and stale client state never surface as errors. Only the owner's posts
/// are actually deleted. The id is parsed before anything else; a
/// malformed id is a 400 even for anonymous callers.
#[delete("/posts/{id}")]
pub async fn delete_post(
    app_state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id: i32 = path
        .into_inner()
        .parse()
        .map_err(|_| ApiError::InvalidPostId)?;

    let uid = firebase_uid_from(&req)?;
    let user = resolve_user(&app_state, &uid)?;

    match app_state.storage.get_post(id) {
        Some(post) if post.user_id == user.id => app_state.storage.delete_post(id),
        Some(_) => log::warn!("user {} tried to delete post {} they do not own", user.id, id),
        None => {}
    }

    Ok(HttpResponse::Ok().json(DeletedOut {
        message: "Post deleted successfully",
    }))
}
