#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The HTTP status behind this failure, or `-1` when the request never
    /// produced one (connect failures, timeouts, malformed bodies).
    pub fn status_code(&self) -> i32 {
        match self {
            ApiError::Status { code, .. } => i32::from(*code),
            _ => -1,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failures_keep_their_code() {
        let error = ApiError::Status {
            code: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(error.status_code(), 503);
    }

    #[test]
    fn non_http_failures_report_minus_one() {
        let error = ApiError::Decode("unexpected end of input".to_string());
        assert_eq!(error.status_code(), -1);
    }
}
