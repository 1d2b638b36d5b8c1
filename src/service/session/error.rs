#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Not logged in")]
    NotAuthenticated,
    #[error("Session holder poisoned")]
    Poisoned,
}
