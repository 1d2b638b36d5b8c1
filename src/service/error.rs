use super::{auth::AuthError, http::ApiError, session::SessionError};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("Auth error: {0}")]
    Auth(AuthError),
    #[error("Session error: {0}")]
    Session(SessionError),
}

impl From<AuthError> for ServiceError {
    fn from(e: AuthError) -> Self {
        Self::Auth(e)
    }
}

impl From<SessionError> for ServiceError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}

impl ServiceError {
    /// The HTTP status behind this failure, or `-1` when there is none.
    /// Callers branch on this; 401 means the session is dead.
    pub fn status_code(&self) -> i32 {
        match self {
            ServiceError::Api(e) => e.status_code(),
            _ => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_status_is_passed_through() {
        let error = ServiceError::Api(ApiError::Status {
            code: 401,
            message: "Unauthorized".to_string(),
        });
        assert_eq!(error.status_code(), 401);
    }

    #[test]
    fn local_failures_have_no_status() {
        let error = ServiceError::Session(SessionError::NotAuthenticated);
        assert_eq!(error.status_code(), -1);
    }
}
