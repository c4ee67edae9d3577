use axum::http::StatusCode;
use thiserror::Error;

/// Closed error taxonomy for the service.
///
/// Callers can tell a malformed request apart from an upstream LLM failure
/// and from a broken deployment without string-matching messages.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed request. Raised at the HTTP boundary before any outbound call.
    #[error("{0}")]
    Validation(String),

    /// Any failure of the upstream chat-completion API: network, auth, quota,
    /// malformed response body.
    #[error("external service error: {0}")]
    ExternalService(String),

    /// Broken startup configuration. The process does not serve traffic.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::ExternalService(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::ExternalService(err.to_string())
    }
}
