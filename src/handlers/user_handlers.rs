// src/handlers/user_handlers.rs - user registration sync

use actix_web::{post, web, HttpResponse};

use crate::dtos::user_dtos::CreateUserDTO;
use crate::error::ApiError;
use crate::models::user::NewUser;
use crate::AppState;

/// The frontend calls this after every sign-in, so hitting an already
/// registered firebaseUid returns the existing record instead of failing.
#[post("/users")]
pub async fn create_user(
    app_state: web::Data<AppState>,
    body: web::Json<CreateUserDTO>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();

    let user = match app_state.storage.get_user_by_firebase_uid(&body.firebase_uid) {
        Some(existing) => existing,
        None => app_state.storage.create_user(NewUser {
            firebase_uid: body.firebase_uid,
            email: body.email,
            display_name: body.display_name,
        }),
    };

    Ok(HttpResponse::Ok().json(user))
}
