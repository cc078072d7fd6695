//! Upstream model providers
//!
//! Each adapter performs exactly one HTTP call per `complete` and never
//! retries; fallback policy belongs to the dispatcher.

pub mod gemini;
pub mod groq;

use async_trait::async_trait;

use crate::core::errors::{Result, TranslationError};
use crate::core::models::ProviderFamily;

pub use gemini::GeminiProvider;
pub use groq::GroqProvider;

/// Sampling temperature sent to every provider
pub const TEMPERATURE: f64 = 0.3;

/// Output token cap sent to every provider
pub const MAX_OUTPUT_TOKENS: u32 = 2000;

/// A text-completion backend
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Which API family this adapter speaks
    fn family(&self) -> ProviderFamily;

    /// Send `prompt` to `model` and return the raw completion text
    async fn complete(&self, model: &str, prompt: &str, api_key: &str) -> Result<String>;
}

/// Turn a non-success response into the matching error kind
pub(crate) fn classify_failure(
    provider: ProviderFamily,
    rate_limit_statuses: &[u16],
    model: &str,
    status: u16,
    body: String,
) -> TranslationError {
    if rate_limit_statuses.contains(&status) {
        TranslationError::RateLimited {
            provider,
            model: model.to_string(),
            status,
            message: body,
        }
    } else {
        TranslationError::ProviderError {
            provider,
            model: model.to_string(),
            status,
            message: body,
        }
    }
}

pub(crate) fn transport_error(err: reqwest::Error) -> TranslationError {
    TranslationError::TransportError {
        message: err.to_string(),
    }
}

pub(crate) fn invalid_response(err: reqwest::Error) -> TranslationError {
    TranslationError::InvalidResponse {
        message: err.to_string(),
    }
}
