//! Lingo Translator - word and sentence translation over hosted language models
//!
//! Short inputs (up to four words) get a dictionary-style breakdown from the
//! Groq models; longer inputs get a single translation, preferably from
//! Gemini. Rate-limited models are skipped in a fixed order of preference.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    client::TranslationDispatcher,
    config::TranslatorConfig,
    errors::TranslationError,
    mode::classify,
    models::{
        model_display_name, OutputMode, ProviderFamily, ProviderModel, TranslationRequest,
        TranslationResult,
    },
    prompt::build_prompt,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
