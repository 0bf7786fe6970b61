//! Error types for HealthBuddy
//!
//! Every fallible library operation returns [`AdvisorError`]. The view
//! collapses these into a single user-facing message, so the variants exist
//! for logging and for callers that need to tell failures apart.

use thiserror::Error;

/// Main error type for the HealthBuddy advisor
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Render state machine transition errors
    #[error("Invalid state transition from {from} via {event}")]
    InvalidTransition { from: String, event: String },

    /// Ollama API errors
    #[error("Ollama API error: {0}")]
    OllamaApiError(String),

    /// Model replied with something that is not a usable assessment
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The owning view was torn down while the call was in flight
    #[error("Operation cancelled")]
    Cancelled,

    /// Generic errors with context
    #[error("Advisor error: {0}")]
    Generic(String),
}

impl AdvisorError {
    /// True for [`AdvisorError::Cancelled`]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, AdvisorError::Cancelled)
    }
}

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Convert anyhow errors to AdvisorError
impl From<anyhow::Error> for AdvisorError {
    fn from(err: anyhow::Error) -> Self {
        AdvisorError::Generic(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AdvisorError::MalformedResponse("missing field `issue`".to_string());
        assert!(err.to_string().contains("missing field `issue`"));
    }

    #[test]
    fn test_invalid_transition_error() {
        let err = AdvisorError::InvalidTransition {
            from: "Loading".to_string(),
            event: "TranslationLoaded".to_string(),
        };
        assert!(err.to_string().contains("Loading"));
        assert!(err.to_string().contains("TranslationLoaded"));
    }

    #[test]
    fn test_cancelled_flag() {
        assert!(AdvisorError::Cancelled.is_cancelled());
        assert!(!AdvisorError::Generic("x".to_string()).is_cancelled());
    }

    #[test]
    fn test_from_anyhow() {
        let err: AdvisorError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, AdvisorError::Generic(ref m) if m == "boom"));
    }
}
