//! Translation dispatcher: provider choice and rate-limit fallback

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::mode::classify;
use crate::core::models::{
    OutputMode, ProviderModel, TranslationRequest, TranslationResult, GEMINI_MODEL,
};
use crate::core::prompt::build_prompt;
use crate::core::providers::{CompletionProvider, GeminiProvider, GroqProvider};

/// Routes a request to Gemini or the Groq cascade.
///
/// Holds no per-call state: keys are passed into every [`translate`] call and
/// nothing learned in one call (rate limits included) affects the next.
///
/// [`translate`]: TranslationDispatcher::translate
#[derive(Clone)]
pub struct TranslationDispatcher {
    primary: Arc<dyn CompletionProvider>,
    secondary: Arc<dyn CompletionProvider>,
    models: Arc<[String]>,
    secondary_model: String,
}

impl std::fmt::Debug for TranslationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationDispatcher")
            .field("primary", &self.primary.family())
            .field("secondary", &self.secondary.family())
            .field("models", &self.models)
            .field("secondary_model", &self.secondary_model)
            .finish()
    }
}

impl TranslationDispatcher {
    /// Create a dispatcher talking to the real Groq and Gemini endpoints
    pub fn new(config: &TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder()
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10);
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder.build()?;

        Ok(Self::with_providers(
            Arc::new(GroqProvider::new(client.clone(), &config.groq_endpoint)),
            Arc::new(GeminiProvider::new(client, &config.gemini_endpoint)),
            config.models.clone(),
        ))
    }

    /// Build from arbitrary providers; `models` is the primary cascade, in order
    pub fn with_providers(
        primary: Arc<dyn CompletionProvider>,
        secondary: Arc<dyn CompletionProvider>,
        models: Vec<String>,
    ) -> Self {
        Self {
            primary,
            secondary,
            models: models.into(),
            secondary_model: GEMINI_MODEL.to_string(),
        }
    }

    /// Primary cascade, in the order it is tried
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Every model this dispatcher may answer with: the secondary model first,
    /// then the primary cascade
    pub fn catalog(&self) -> Vec<ProviderModel> {
        std::iter::once(ProviderModel::new(
            self.secondary.family(),
            self.secondary_model.as_str(),
        ))
        .chain(
            self.models
                .iter()
                .map(|m| ProviderModel::new(self.primary.family(), m.as_str())),
        )
        .collect()
    }

    /// Translate a single request.
    ///
    /// Sentences go to the secondary provider first when `secondary_key` is
    /// given; any failure there is logged and ignored. The primary cascade then
    /// tries each model in order, moving on only after a rate limit. Any other
    /// failure ends the call.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
        primary_key: &str,
        secondary_key: Option<&str>,
    ) -> Result<TranslationResult> {
        let mode = classify(&request.text);
        debug!("Classified request as {} ({} chars)", mode, request.text.len());

        let mut prompt = None;

        if mode == OutputMode::Sentence {
            if let Some(key) = secondary_key.filter(|k| !k.is_empty()) {
                let sentence_prompt = build_prompt(mode, request);
                let attempt = self.try_secondary(&sentence_prompt, key).await;
                match attempt {
                    Ok(translation) => {
                        info!("Translated with {}", self.secondary_model);
                        return Ok(TranslationResult {
                            translation,
                            model: self.secondary_model.clone(),
                            provider: self.secondary.family(),
                            mode,
                        });
                    }
                    Err(e) => {
                        warn!(
                            "{} failed, falling back to {}: {}",
                            self.secondary.family(),
                            self.primary.family(),
                            e
                        );
                        prompt = Some(sentence_prompt);
                    }
                }
            }
        }

        let prompt = prompt.unwrap_or_else(|| build_prompt(mode, request));
        self.run_cascade(&prompt, primary_key, mode).await
    }

    async fn try_secondary(&self, prompt: &str, key: &str) -> Result<String> {
        self.secondary
            .complete(&self.secondary_model, prompt, key)
            .await
    }

    /// Walk the primary models in order until one answers
    async fn run_cascade(
        &self,
        prompt: &str,
        key: &str,
        mode: OutputMode,
    ) -> Result<TranslationResult> {
        let mut last_rate_limit = None;

        for model in self.models.iter() {
            debug!("Trying {}", model);

            match self.primary.complete(model, prompt, key).await {
                Ok(translation) => {
                    info!("Translated with {}", model);
                    return Ok(TranslationResult {
                        translation,
                        model: model.clone(),
                        provider: self.primary.family(),
                        mode,
                    });
                }
                Err(e) if e.is_retryable() => {
                    warn!("Rate limit hit for {}, trying next model: {}", model, e);
                    last_rate_limit = Some(e);
                }
                Err(e) => {
                    warn!("Model {} failed: {}", model, e);
                    return Err(e);
                }
            }
        }

        Err(last_rate_limit.unwrap_or(TranslationError::AllModelsExhausted))
    }
}
