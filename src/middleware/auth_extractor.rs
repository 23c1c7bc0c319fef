// src/middleware/auth_extractor.rs - header-based identity
use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};

use crate::error::ApiError;

/// Header carrying the caller's Firebase UID. The value is trusted as-is;
/// token verification belongs in front of this service (or in a future
/// replacement of this extractor).
pub const FIREBASE_UID_HEADER: &str = "x-firebase-uid";

/// The authenticated caller, as claimed by the request headers.
pub struct FirebaseUser {
    pub uid: String,
}

/// Reads the UID header from a request. Handlers that cannot use the
/// extractor (because another check must run first) call this directly.
pub fn firebase_uid_from(req: &HttpRequest) -> Result<String, ApiError> {
    req.headers()
        .get(FIREBASE_UID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|uid| uid.to_string())
        .filter(|uid| !uid.is_empty())
        .ok_or(ApiError::AuthRequired)
}

impl FromRequest for FirebaseUser {
    type Error = ApiError;
    type Future = Ready<Result<FirebaseUser, ApiError>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(firebase_uid_from(req).map(|uid| FirebaseUser { uid }))
    }
}
