use serde_json::json;

use super::http::{routes, HttpService};
use super::session::SessionService;
use super::ServiceError;
use crate::models::UserSettings;

#[derive(Clone)]
pub struct SettingsService {
    http: HttpService,
    session: SessionService,
}

impl SettingsService {
    pub fn new(http: HttpService, session: SessionService) -> Self {
        Self { http, session }
    }

    /// Persist settings server-side, then overwrite the copy cached in the
    /// session holder so later screens see what was just saved.
    pub async fn save(&self, settings: &UserSettings) -> Result<(), ServiceError> {
        let token = self.session.token()?;

        let payload = json!({ "token": token, "settings": settings });
        self.http.post_json(routes::SAVE_SETTINGS, &payload).await?;

        self.session.update_preferences(settings.clone())?;

        info!("Settings saved");
        Ok(())
    }
}
