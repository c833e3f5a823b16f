use thiserror::Error;

/// Everything that can go wrong talking to the dashboard backend or
/// preparing a request for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not complete (connection failure, non-success status).
    #[error("network error: {0}")]
    Network(String),
    /// The response arrived but its body was not the expected shape.
    #[error("malformed response: {0}")]
    Parse(String),
    /// Required user input is missing or invalid; nothing was sent.
    #[error("{0}")]
    UserInput(String),
}

impl ApiError {
    pub fn is_user_input(&self) -> bool {
        matches!(self, Self::UserInput(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Parse(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
