//! Typed errors for the analysis pipeline.

use openai_client::OpenAIError;
use thiserror::Error;

/// Message shown when no API key was configured.
pub const MISSING_KEY_MESSAGE: &str = "OpenAI API key not configured";

/// Message shown for any failed or unreadable classifier call.
pub const API_FAILED_MESSAGE: &str = "API call failed";

/// Errors that can end an analysis run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Required credential missing; nothing was sent.
    #[error("configuration error: {0}")]
    Config(String),

    /// Classifier unreachable or answered with a non-success status.
    #[error("transport error: {0}")]
    Transport(String),

    /// Classifier answered, but not with the expected JSON shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Another analysis is still in flight on this session.
    #[error("an analysis is already in progress")]
    Busy,
}

impl AnalysisError {
    pub fn missing_api_key() -> Self {
        Self::Config(MISSING_KEY_MESSAGE.to_string())
    }

    /// The single string shown to the user.
    ///
    /// Transport and parse failures read the same; `Display` keeps the
    /// detail for logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(message) => message.clone(),
            Self::Transport(_) | Self::Parse(_) => API_FAILED_MESSAGE.to_string(),
            Self::Busy => "Analysis already in progress".to_string(),
        }
    }
}

impl From<OpenAIError> for AnalysisError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::Network(message) => Self::Transport(message),
            OpenAIError::Api { status, message } => {
                Self::Transport(format!("status {}: {}", status, message))
            }
            OpenAIError::Parse(message) => Self::Parse(message),
        }
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
