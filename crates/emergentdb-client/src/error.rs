use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid API key: {0}")]
    ApiKey(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        message: String,
        /// Raw JSON error body, when the service returned one.
        body: Option<serde_json::Value>,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status code for API-returned errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
