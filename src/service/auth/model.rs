use serde::Deserialize;

use crate::models::UserSettings;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of a successful `/user/login`. Older backend builds answer with the
/// token alone; `preferences` defaults when absent.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub preferences: Option<UserSettings>,
}
