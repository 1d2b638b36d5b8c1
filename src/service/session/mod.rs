mod error;
mod model;
pub use error::SessionError;
pub use model::Session;

use std::sync::{Arc, RwLock};

use crate::models::UserSettings;

/// Single-slot holder for the current session. Writes overwrite whatever was
/// there (last-write-wins); there is exactly one interactive user behind it.
#[derive(Clone, Default)]
pub struct SessionService {
    current: Arc<RwLock<Option<Session>>>,
}

impl SessionService {
    pub fn new() -> Self {
        info!("Initializing session service");
        Self::default()
    }

    pub fn set(&self, session: Session) -> Result<(), SessionError> {
        let mut slot = self.current.write().map_err(|_| SessionError::Poisoned)?;
        *slot = Some(session);
        Ok(())
    }

    pub fn current(&self) -> Result<Option<Session>, SessionError> {
        let slot = self.current.read().map_err(|_| SessionError::Poisoned)?;
        Ok(slot.clone())
    }

    /// The token to attach to a request. Fails before any network I/O happens
    /// when nobody is logged in.
    pub fn token(&self) -> Result<String, SessionError> {
        self.current()?
            .map(|session| session.token)
            .ok_or(SessionError::NotAuthenticated)
    }

    pub fn update_preferences(&self, preferences: UserSettings) -> Result<(), SessionError> {
        let mut slot = self.current.write().map_err(|_| SessionError::Poisoned)?;
        match slot.as_mut() {
            Some(session) => {
                session.preferences = preferences;
                Ok(())
            }
            None => Err(SessionError::NotAuthenticated),
        }
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        let mut slot = self.current.write().map_err(|_| SessionError::Poisoned)?;
        if slot.take().is_some() {
            info!("Session cleared");
        }
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.current(), Ok(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppTheme;

    #[test]
    fn token_requires_a_login() {
        let sessions = SessionService::new();
        assert!(matches!(sessions.token(), Err(SessionError::NotAuthenticated)));
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn set_overwrites_the_previous_session() {
        let sessions = SessionService::new();
        sessions.set(Session::new("first".into(), UserSettings::default())).unwrap();
        sessions
            .set(Session::new("second".into(), UserSettings { theme: AppTheme::Dark }))
            .unwrap();

        assert_eq!(sessions.token().unwrap(), "second");
        assert_eq!(sessions.current().unwrap().unwrap().preferences.theme, AppTheme::Dark);
    }

    #[test]
    fn update_preferences_touches_only_the_settings() {
        let sessions = SessionService::new();
        sessions.set(Session::new("token".into(), UserSettings::default())).unwrap();
        sessions
            .update_preferences(UserSettings { theme: AppTheme::Foxy })
            .unwrap();

        let session = sessions.current().unwrap().unwrap();
        assert_eq!(session.token, "token");
        assert_eq!(session.preferences.theme, AppTheme::Foxy);
    }

    #[test]
    fn clear_is_idempotent() {
        let sessions = SessionService::new();
        sessions.set(Session::new("token".into(), UserSettings::default())).unwrap();
        sessions.clear().unwrap();
        sessions.clear().unwrap();
        assert!(!sessions.is_authenticated());
    }
}
