use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned non-success status: {status}")]
    HttpStatusError { status: u16 },

    #[error("Field '{path}' missing from price response")]
    MissingFieldError { path: String },

    #[error("Invalid price value: {reason}")]
    InvalidPriceError { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ClockError {
    /// Errors that the clock absorbs by showing the `ERROR` display text.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            ClockError::ApiError(_)
                | ClockError::HttpStatusError { .. }
                | ClockError::MissingFieldError { .. }
                | ClockError::InvalidPriceError { .. }
                | ClockError::SerializationError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ClockError>;
