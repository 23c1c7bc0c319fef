use serde::Deserialize;

/// POST /api/users body. The client calls this right after Firebase
/// sign-in; a firebaseUid we have already seen returns the existing record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDTO {
    pub firebase_uid: String,
    pub email: String,
    pub display_name: Option<String>,
}
