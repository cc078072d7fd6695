//! CLI command definitions and handlers

use clap::Subcommand;
use tracing::info;

use crate::core::client::TranslationDispatcher;
use crate::core::config::TranslatorConfig;
use crate::core::languages::{all_languages, search_languages};
use crate::core::models::{TranslationRequest, AUTO_SOURCE};

/// Commands for the translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a word, phrase or sentence
    Translate {
        /// Text to translate
        text: String,

        /// Target language code (e.g. en, uz, de)
        #[arg(short, long)]
        to: String,

        /// Source language code (auto-detect if not specified)
        #[arg(short, long, default_value = AUTO_SOURCE)]
        from: String,

        /// Extra context for tone or domain
        #[arg(short, long)]
        context: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported languages
    Languages {
        /// Filter by name, native name or code
        query: Option<String>,
    },

    /// List models in the order they are tried
    Models,

    /// Start HTTP API server
    Server {
        /// Bind address (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

/// Handle translate command
pub async fn handle_translate(
    config: TranslatorConfig,
    text: String,
    to: String,
    from: String,
    context: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("Text is required");
    }

    let groq_key = config.require_groq_key()?.to_string();
    let dispatcher = TranslationDispatcher::new(&config)?;

    let mut request = TranslationRequest::new(text, to).with_source_lang(from);
    if let Some(context) = context {
        request = request.with_context(context);
    }

    info!(
        "Translating {} -> {}",
        request.source_lang, request.target_lang
    );

    let result = dispatcher
        .translate(&request, &groq_key, config.gemini_api_key.as_deref())
        .await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "translation": &result.translation,
                "model": result.model_display_name(),
                "mode": result.mode,
            }))?
        );
    } else {
        println!("{}", result.translation);
        println!("\n[{} · {}]", result.model_display_name(), result.mode);
    }

    Ok(())
}

/// Handle languages command
pub fn handle_languages(query: Option<String>) -> anyhow::Result<()> {
    let languages = match query.as_deref() {
        Some(q) => search_languages(q),
        None => all_languages().iter().collect(),
    };

    if languages.is_empty() {
        anyhow::bail!("No languages match");
    }

    for lang in languages {
        println!("{} {:<4} {:<12} {}", lang.flag, lang.code, lang.name, lang.native_name);
    }

    Ok(())
}

/// Handle models command
pub fn handle_models(config: TranslatorConfig) -> anyhow::Result<()> {
    let dispatcher = TranslationDispatcher::new(&config)?;

    for (i, model) in dispatcher.catalog().iter().enumerate() {
        println!(
            "{}. {:<24} {:<8} {}",
            i + 1,
            model.id,
            model.provider,
            model.display_name
        );
    }

    if config.gemini_api_key.is_none() {
        println!("\nGEMINI_API_KEY is not set: sentences go straight to the Groq models.");
    }

    Ok(())
}

/// Handle server command
pub async fn handle_server(config: TranslatorConfig, host: String, port: u16) -> anyhow::Result<()> {
    use crate::server::api::run_server;

    info!("Starting HTTP server on {}:{}", host, port);
    println!("🚀 Server starting on http://{}:{}", host, port);

    run_server(host, port, config).await?;

    Ok(())
}
