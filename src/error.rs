use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("{0}")]
    Auth(String),

    #[error("Session storage unavailable: {0}")]
    Storage(String),

    #[error("You must be logged in")]
    NotSignedIn,
}

/// Shape of the JSON error body the review API returns, e.g. `{"message": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl AppError {
    /// Builds a status error, keeping the server's `message` field when the
    /// body carries one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        AppError::Status { status, message }
    }

    /// Text for the toast raised at the call site.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Status { message: Some(m), .. } => m.clone(),
            AppError::Auth(m) => m.clone(),
            AppError::NotSignedIn => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AppError::Decode(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}
