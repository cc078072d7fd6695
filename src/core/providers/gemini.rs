//! Gemini adapter (generateContent, single model)

use async_trait::async_trait;
use tracing::debug;

use super::{classify_failure, invalid_response, transport_error, CompletionProvider};
use super::{MAX_OUTPUT_TOKENS, TEMPERATURE};
use crate::core::errors::Result;
use crate::core::models::ProviderFamily;

/// Default API base; the model path is appended per call
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Statuses Gemini uses for "busy, try later"
pub const RATE_LIMIT_STATUSES: &[u16] = &[429, 503];

/// Gemini generateContent client
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
}

impl GeminiProvider {
    /// Adapter posting under `base_url` with a shared client
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    fn family(&self) -> ProviderFamily {
        ProviderFamily::Gemini
    }

    async fn complete(&self, model: &str, prompt: &str, api_key: &str) -> Result<String> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": TEMPERATURE,
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
            },
        });

        let endpoint = self.endpoint(model);
        debug!("POST {}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(classify_failure(
                ProviderFamily::Gemini,
                RATE_LIMIT_STATUSES,
                model,
                status.as_u16(),
                error_text,
            ));
        }

        let json: serde_json::Value = response.json().await.map_err(invalid_response)?;

        Ok(json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .unwrap_or_default()
            .to_string())
    }
}
