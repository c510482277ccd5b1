use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(promptcal::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(promptcal::config))]
    Config(String),

    #[error("Google Calendar API error: {0}")]
    #[diagnostic(code(promptcal::google_calendar))]
    CalendarApi(String),

    #[error("Extraction error: {0}")]
    #[diagnostic(code(promptcal::extraction))]
    Extraction(String),

    #[error("Missing required parameters: {0}")]
    #[diagnostic(code(promptcal::missing_input))]
    MissingInput(String),

    #[error(transparent)]
    #[diagnostic(code(promptcal::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(promptcal::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(promptcal::other))]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create Google Calendar errors
pub fn calendar_error(message: &str) -> Error {
    Error::CalendarApi(message.to_string())
}

/// Helper to create extraction errors
pub fn extraction_error(message: &str) -> Error {
    Error::Extraction(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
