use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("no keywords supplied")]
    EmptyInput,

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Configuration error: {field}: {reason}")]
    ConfigError { field: String, reason: String },
}

/// How a failure is reported to the caller: its own fault or ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    BadRequest,
    ServerError,
}

impl AnalyzeError {
    pub fn classification(&self) -> ErrorClass {
        match self {
            AnalyzeError::EmptyInput => ErrorClass::BadRequest,
            _ => ErrorClass::ServerError,
        }
    }

    /// Message safe to show an end user; internal detail stays in the logs.
    pub fn user_friendly_message(&self) -> &'static str {
        match self.classification() {
            ErrorClass::BadRequest => "Please enter at least one keyword.",
            ErrorClass::ServerError => "A server error occurred. Please try again later.",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
