//! Groq adapter (OpenAI-compatible chat completions, many models)

use async_trait::async_trait;
use tracing::debug;

use super::{classify_failure, invalid_response, transport_error, CompletionProvider};
use super::{MAX_OUTPUT_TOKENS, TEMPERATURE};
use crate::core::errors::Result;
use crate::core::models::ProviderFamily;

/// Default chat completions endpoint
pub const DEFAULT_GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Statuses Groq uses for "busy, try later"
pub const RATE_LIMIT_STATUSES: &[u16] = &[429, 503, 529];

/// Groq chat completions client
#[derive(Debug, Clone)]
pub struct GroqProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl GroqProvider {
    /// Adapter posting to `endpoint` with a shared client
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    fn family(&self) -> ProviderFamily {
        ProviderFamily::Groq
    }

    async fn complete(&self, model: &str, prompt: &str, api_key: &str) -> Result<String> {
        let body = serde_json::json!({
            "model": model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_OUTPUT_TOKENS,
        });

        debug!("POST {} model={}", self.endpoint, model);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(classify_failure(
                ProviderFamily::Groq,
                RATE_LIMIT_STATUSES,
                model,
                status.as_u16(),
                error_text,
            ));
        }

        let json: serde_json::Value = response.json().await.map_err(invalid_response)?;

        // Missing content is treated like empty content
        Ok(json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default()
            .to_string())
    }
}
