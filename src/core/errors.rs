//! Custom error types for translation operations

use thiserror::Error;

use crate::core::models::ProviderFamily;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Provider answered with a status from its rate-limit band
    #[error("Rate limit hit for {model}: {status} - {message}")]
    RateLimited {
        /// Family that answered
        provider: ProviderFamily,
        /// Model that was asked
        model: String,
        /// HTTP status received
        status: u16,
        /// Response body, verbatim
        message: String,
    },

    /// Provider answered with any other non-success status
    #[error("{provider} {model} failed: {status} - {message}")]
    ProviderError {
        /// Family that answered
        provider: ProviderFamily,
        /// Model that was asked
        model: String,
        /// HTTP status received
        status: u16,
        /// Response body, verbatim
        message: String,
    },

    /// No response was received (DNS, connect, timeout)
    #[error("Network error: {message}")]
    TransportError {
        /// What went wrong
        message: String,
    },

    /// Success status but the body could not be decoded
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// What went wrong
        message: String,
    },

    /// Cascade finished without any recorded rate-limit failure
    #[error("All models hit rate limits")]
    AllModelsExhausted,

    /// Request rejected before reaching the dispatcher
    #[error("{message}")]
    ValidationError {
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What went wrong
        message: String,
    },

    /// Reqwest client construction error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TranslationError {
    /// Whether this failure came from a provider's rate-limit band
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, TranslationError::RateLimited { .. })
    }

    /// Whether the cascade may move on to the next model after this failure
    pub fn is_retryable(&self) -> bool {
        self.is_rate_limited()
    }

    /// Whether the failure means the whole service is busy, i.e. the cascade ran dry
    pub fn is_exhaustion(&self) -> bool {
        matches!(
            self,
            TranslationError::RateLimited { .. } | TranslationError::AllModelsExhausted
        )
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        TranslationError::ValidationError {
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        TranslationError::ConfigError {
            message: message.into(),
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
