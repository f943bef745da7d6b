use thiserror::Error;

/// Why a shorten request did not produce a result.
///
/// The controller does not distinguish between variants; they all land in
/// the `Failed` state and can be retried by submitting again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenError {
    /// Transport failure, server-side error or timeout.
    #[error("Shortening service unavailable: {message}")]
    ServiceUnavailable { message: String },

    /// The call completed but carried nothing usable.
    #[error("Shortening service returned no result")]
    EmptyResponse,

    /// The service rejected the text as a URL.
    #[error("Invalid URL: {message}")]
    InvalidInput { message: String },
}

impl ShortenError {
    /// Generic message for display. Root causes are only logged.
    pub fn user_message(&self) -> &'static str {
        match self {
            ShortenError::ServiceUnavailable { .. } => "Shortening service is unavailable",
            ShortenError::EmptyResponse => "No short URL was returned",
            ShortenError::InvalidInput { .. } => "That does not look like a valid URL",
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        ShortenError::ServiceUnavailable {
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        ShortenError::InvalidInput {
            message: message.into(),
        }
    }
}
