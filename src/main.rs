//! Main entry point for the lingo-translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lingo_translator::cli::commands::{self, Commands};
use lingo_translator::TranslatorConfig;

/// Vocabulary and sentence translator backed by hosted language models
#[derive(Parser, Debug)]
#[command(name = "lingo-translator", version, about, long_about = None)]
struct Args {
    /// Groq API key (optional, defaults to GROQ_API_KEY env var)
    #[arg(long)]
    groq_api_key: Option<String>,

    /// Gemini API key (optional, defaults to GEMINI_API_KEY env var)
    #[arg(long)]
    gemini_api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    let default_filter = format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), log_level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = TranslatorConfig::from_env()?.with_keys(args.groq_api_key, args.gemini_api_key);

    match args.command {
        Some(Commands::Translate {
            text,
            to,
            from,
            context,
            json,
        }) => {
            commands::handle_translate(config, text, to, from, context, json).await?;
        }
        Some(Commands::Languages { query }) => {
            commands::handle_languages(query)?;
        }
        Some(Commands::Models) => {
            commands::handle_models(config)?;
        }
        Some(Commands::Server { host, port }) => {
            commands::handle_server(config, host, port).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
