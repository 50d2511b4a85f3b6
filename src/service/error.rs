use thiserror::Error;

/// Everything that can go wrong talking to the favorites API.
///
/// None of these are fatal. Callers turn them into notifications, empty
/// panels or count fallbacks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused, timeout).
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The server answered `{"success": false}`.
    #[error("{0}")]
    Rejected(String),

    /// The body was not the JSON shape we expected.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for showing to the user.
    pub fn reason(&self) -> &str {
        match self {
            ApiError::Transport(msg) => msg,
            ApiError::Status { message, .. } => message,
            ApiError::Rejected(msg) => msg,
            ApiError::Decode(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
