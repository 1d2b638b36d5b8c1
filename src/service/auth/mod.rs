mod error;
mod model;
pub use error::AuthError;
pub use model::*;

use serde_json::json;

use super::http::{routes, HttpService};
use super::session::{Session, SessionService};
use super::ServiceError;

#[derive(Clone)]
pub struct AuthService {
    http: HttpService,
    session: SessionService,
}

impl AuthService {
    pub fn new(http: HttpService, session: SessionService) -> Self {
        Self { http, session }
    }

    /// Exchange credentials for a token and store the resulting session,
    /// replacing whatever login was active before.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ServiceError> {
        validate(credentials)?;

        info!("Logging in as {}", credentials.username);

        let payload = json!({
            "username": credentials.username,
            "password": credentials.password,
        });

        let response: LoginResponse = self.http.post(routes::LOGIN, &payload).await?;
        if response.token.is_empty() {
            return Err(AuthError::MissingToken.into());
        }

        let session = Session::new(response.token, response.preferences.unwrap_or_default());
        self.session.set(session.clone())?;

        info!("Login successful for {}", credentials.username);

        Ok(session)
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<(), ServiceError> {
        validate(credentials)?;

        info!("Registering account {}", credentials.username);

        let payload = json!({
            "username": credentials.username,
            "password": credentials.password,
        });

        self.http.post_json(routes::REGISTER, &payload).await?;
        Ok(())
    }

    /// Tell the server the session is over. The local session is dropped even
    /// when the server call fails; the token is gone client-side regardless.
    pub async fn logout(&self) -> Result<(), ServiceError> {
        let token = self.session.token()?;

        info!("Logging out");

        let result = self.http.post_json(routes::LOGOUT, &json!({ "token": token })).await;
        self.session.clear()?;

        result?;
        Ok(())
    }
}

fn validate(credentials: &Credentials) -> Result<(), AuthError> {
    if credentials.username.trim().is_empty() || credentials.password.is_empty() {
        return Err(AuthError::ValidationError(
            "username and password must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credentials_are_rejected() {
        let credentials = Credentials {
            username: "  ".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(matches!(validate(&credentials), Err(AuthError::ValidationError(_))));

        let credentials = Credentials {
            username: "bob".to_string(),
            password: String::new(),
        };
        assert!(matches!(validate(&credentials), Err(AuthError::ValidationError(_))));
    }
}
