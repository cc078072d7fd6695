//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source-language sentinel asking the model to detect the language itself
pub const AUTO_SOURCE: &str = "auto";

/// Groq models, most accurate first, fastest last. The cascade walks this in order.
pub const GROQ_MODELS: &[&str] = &[
    "openai/gpt-oss-120b",
    "llama-3.1-70b-versatile",
    "openai/gpt-oss-20b",
    "qwen-qwq-32b",
    "llama-3.1-8b-instant",
];

/// The single Gemini model used for sentence translations
pub const GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Human-readable labels for known model identifiers
const MODEL_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("openai/gpt-oss-120b", "GPT-OSS 120B"),
    ("openai/gpt-oss-20b", "GPT-OSS 20B"),
    ("llama-3.1-70b-versatile", "Llama 3.1 70B"),
    ("qwen-qwq-32b", "Qwen QwQ 32B"),
    ("llama-3.1-8b-instant", "Llama 3.1 8B"),
    (GEMINI_MODEL, "Gemini Flash"),
];

/// Display label for a model, or the raw identifier when it is unknown
pub fn model_display_name(model: &str) -> &str {
    MODEL_DISPLAY_NAMES
        .iter()
        .find(|(id, _)| *id == model)
        .map(|(_, name)| *name)
        .unwrap_or(model)
}

/// How the translation is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Dictionary-style breakdown with several senses (1-4 words)
    Vocabulary,
    /// One direct translation (5+ words)
    Sentence,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Vocabulary => write!(f, "vocabulary"),
            OutputMode::Sentence => write!(f, "sentence"),
        }
    }
}

/// Upstream API family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderFamily {
    /// OpenAI-compatible chat completions, several models
    Groq,
    /// generateContent API, one fixed model
    Gemini,
}

impl fmt::Display for ProviderFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderFamily::Groq => write!(f, "Groq"),
            ProviderFamily::Gemini => write!(f, "Gemini"),
        }
    }
}

/// A callable backend: provider family plus model identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderModel {
    /// API family serving the model
    pub provider: ProviderFamily,
    /// Identifier sent upstream
    pub id: String,
    /// Label shown to users
    pub display_name: String,
}

impl ProviderModel {
    /// Pair a model id with its family, filling in the display name
    pub fn new(provider: ProviderFamily, id: impl Into<String>) -> Self {
        let id = id.into();
        let display_name = model_display_name(&id).to_string();
        Self {
            provider,
            id,
            display_name,
        }
    }
}

/// Translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate, already trimmed
    pub text: String,
    /// Source language code or `auto`
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
    /// Optional hint for tone or domain
    pub context: Option<String>,
}

impl TranslationRequest {
    /// Request with auto-detected source and no context
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_lang: AUTO_SOURCE.to_string(),
            target_lang: target_lang.into(),
            context: None,
        }
    }

    /// Pin the source language
    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = source_lang.into();
        self
    }

    /// Attach a context hint
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// True when the caller left language detection to the model
    pub fn is_auto_source(&self) -> bool {
        self.source_lang == AUTO_SOURCE
    }

    /// Context, if any was given and it is not blank
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref().filter(|c| !c.is_empty())
    }
}

/// Translation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Raw model output, not checked against the template
    pub translation: String,
    /// Id of the model that answered
    pub model: String,
    /// Family of that model
    pub provider: ProviderFamily,
    /// Mode the prompt was built for
    pub mode: OutputMode,
}

impl TranslationResult {
    /// Display label of the model that produced the translation
    pub fn model_display_name(&self) -> &str {
        model_display_name(&self.model)
    }
}
