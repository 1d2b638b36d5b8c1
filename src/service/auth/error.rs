#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Login response is missing a token")]
    MissingToken,
}
