//! HTTP API server implementation

use axum::{
    extract::{rejection::JsonRejection, Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::client::TranslationDispatcher;
use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::languages::{all_languages, search_languages, Language};
use crate::core::models::{OutputMode, ProviderModel, TranslationRequest, AUTO_SOURCE};

/// Longest text accepted by `/api/translate`, in characters
pub const MAX_CHARS: usize = 5000;

/// Application state
#[derive(Clone)]
pub struct AppState {
    dispatcher: Arc<TranslationDispatcher>,
    config: Arc<TranslatorConfig>,
}

impl AppState {
    /// State shared by every handler
    pub fn new(dispatcher: TranslationDispatcher, config: TranslatorConfig) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            config: Arc::new(config),
        }
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Translation request body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateBody {
    /// Text to translate; anything but a non-blank string is rejected
    pub text: Option<serde_json::Value>,
    /// Source language code, `auto` when absent
    pub source_lang: Option<String>,
    /// Target language code
    pub target_lang: Option<String>,
    /// Free-text hint for tone or domain
    pub context: Option<String>,
}

/// Translation response body
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    /// Raw model output
    pub translation: String,
    /// Display name, not the raw model id
    pub model: String,
    /// Mode the prompt was built for
    pub mode: OutputMode,
}

/// Query string of `/api/languages`
#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    /// Search term
    pub q: Option<String>,
}

#[derive(Serialize)]
struct LanguagesResponse {
    data: Vec<&'static Language>,
}

#[derive(Serialize)]
struct ModelsResponse {
    data: Vec<ProviderModel>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}

/// Error returned by handlers: status plus a single message
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<TranslationError> for ApiError {
    fn from(err: TranslationError) -> Self {
        let status = match err {
            TranslationError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Check the body and turn it into a core request (text trimmed, source defaulted)
pub fn validate_body(body: TranslateBody) -> Result<TranslationRequest> {
    let text = match body.text {
        Some(serde_json::Value::String(text)) if !text.trim().is_empty() => text,
        _ => return Err(TranslationError::validation("Text is required")),
    };

    if text.chars().count() > MAX_CHARS {
        return Err(TranslationError::validation(format!(
            "Text exceeds maximum length of {} characters",
            MAX_CHARS
        )));
    }

    let target_lang = match body.target_lang {
        Some(lang) if !lang.trim().is_empty() => lang,
        _ => return Err(TranslationError::validation("Target language is required")),
    };

    let source_lang = body
        .source_lang
        .filter(|lang| !lang.trim().is_empty())
        .unwrap_or_else(|| AUTO_SOURCE.to_string());

    let mut request = TranslationRequest::new(text.trim(), target_lang).with_source_lang(source_lang);
    if let Some(context) = body.context {
        request = request.with_context(context);
    }
    Ok(request)
}

/// Health check handler
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Translation handler
async fn translate(
    State(state): State<AppState>,
    body: std::result::Result<Json<TranslateBody>, JsonRejection>,
) -> std::result::Result<Json<TranslateResponse>, ApiError> {
    let Json(body) = body?;
    let request = validate_body(body)?;
    let groq_key = state.config.require_groq_key()?;

    let result = state
        .dispatcher
        .translate(&request, groq_key, state.config.gemini_api_key.as_deref())
        .await
        .map_err(|e| {
            if e.is_exhaustion() {
                warn!("All models busy: {}", e);
            } else {
                warn!("Translation failed: {}", e);
            }
            e
        })?;

    Ok(Json(TranslateResponse {
        model: result.model_display_name().to_string(),
        translation: result.translation,
        mode: result.mode,
    }))
}

/// Language list handler, optionally filtered by `?q=`
async fn get_languages(Query(query): Query<LanguageQuery>) -> Json<LanguagesResponse> {
    let data = match query.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => search_languages(q),
        _ => all_languages().iter().collect(),
    };
    Json(LanguagesResponse { data })
}

/// Get models handler
async fn get_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        data: state.dispatcher.catalog(),
    })
}

/// Build the router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/api/translate", post(translate))
        .route("/api/languages", get(get_languages))
        .route("/api/models", get(get_models))
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16, config: TranslatorConfig) -> anyhow::Result<()> {
    let dispatcher = TranslationDispatcher::new(&config)?;
    let app = router(AppState::new(dispatcher, config));

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ProviderFamily, GEMINI_MODEL};
    use crate::core::providers::testing::{Reply, ScriptedProvider};
    use assert_json_diff::assert_json_eq;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn body(text: Option<&str>, target: Option<&str>) -> TranslateBody {
        TranslateBody {
            text: text.map(|t| serde_json::Value::String(t.to_string())),
            target_lang: target.map(str::to_string),
            ..Default::default()
        }
    }

    fn app(groq: ScriptedProvider, groq_key: Option<&str>) -> Router {
        let gemini = ScriptedProvider::new(ProviderFamily::Gemini)
            .reply(GEMINI_MODEL, Reply::RateLimited(429));
        let dispatcher = TranslationDispatcher::with_providers(
            Arc::new(groq),
            Arc::new(gemini),
            vec!["openai/gpt-oss-120b".to_string(), "llama-3.1-8b-instant".to_string()],
        );
        let config = TranslatorConfig {
            groq_api_key: groq_key.map(str::to_string),
            gemini_api_key: Some("gem".to_string()),
            ..Default::default()
        };
        router(AppState::new(dispatcher, config))
    }

    async fn post_json(app: Router, payload: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/translate")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> Value {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_validate_requires_text() {
        for text in [None, Some(""), Some("   ")] {
            let err = validate_body(body(text, Some("en"))).unwrap_err();
            assert_eq!(err.to_string(), "Text is required");
        }
    }

    #[test]
    fn test_validate_length_limit() {
        let at_limit = "a".repeat(MAX_CHARS);
        assert!(validate_body(body(Some(&at_limit), Some("en"))).is_ok());

        let too_long = "ü".repeat(MAX_CHARS + 1);
        let err = validate_body(body(Some(&too_long), Some("en"))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Text exceeds maximum length of 5000 characters"
        );
    }

    #[test]
    fn test_validate_rejects_non_string_text() {
        for text in [json!(123), json!(["hello"]), json!(null), json!({ "t": "hi" })] {
            let body = TranslateBody {
                text: Some(text),
                target_lang: Some("en".to_string()),
                ..Default::default()
            };
            let err = validate_body(body).unwrap_err();
            assert_eq!(err.to_string(), "Text is required");
        }
    }

    #[test]
    fn test_validate_requires_target() {
        let err = validate_body(body(Some("hi"), None)).unwrap_err();
        assert_eq!(err.to_string(), "Target language is required");
    }

    #[test]
    fn test_validate_trims_and_defaults_source() {
        let request = validate_body(body(Some("  hello  "), Some("uz"))).unwrap();
        assert_eq!(request.text, "hello");
        assert_eq!(request.source_lang, AUTO_SOURCE);
        assert_eq!(request.target_lang, "uz");
    }

    #[tokio::test]
    async fn test_translate_returns_display_name() {
        let groq = ScriptedProvider::new(ProviderFamily::Groq)
            .reply("openai/gpt-oss-120b", Reply::RateLimited(429))
            .reply("llama-3.1-8b-instant", Reply::Text("Detected Language: English 🇬🇧".into()));

        let (status, json) = post_json(
            app(groq, Some("gsk")),
            json!({ "text": "hello", "targetLang": "uz" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_json_eq!(
            json,
            json!({
                "translation": "Detected Language: English 🇬🇧",
                "model": "Llama 3.1 8B",
                "mode": "vocabulary"
            })
        );
    }

    #[tokio::test]
    async fn test_translate_validation_is_bad_request() {
        let groq = ScriptedProvider::new(ProviderFamily::Groq);
        let (status, json) = post_json(app(groq, Some("gsk")), json!({ "text": "hi" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_json_eq!(json, json!({ "error": "Target language is required" }));
    }

    async fn post_raw(app: Router, content_type: Option<&str>, payload: &str) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("POST").uri("/api/translate");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let response = app
            .oneshot(builder.body(Body::from(payload.to_string())).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_translate_numeric_text_is_bad_request() {
        let groq = ScriptedProvider::new(ProviderFamily::Groq);
        let (status, json) = post_json(
            app(groq.clone(), Some("gsk")),
            json!({ "text": 123, "targetLang": "en" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_json_eq!(json, json!({ "error": "Text is required" }));
        assert!(groq.calls().is_empty());
    }

    #[tokio::test]
    async fn test_translate_malformed_json_is_bad_request() {
        let groq = ScriptedProvider::new(ProviderFamily::Groq);
        let (status, json) =
            post_raw(app(groq, Some("gsk")), Some("application/json"), "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("JSON"));
    }

    #[tokio::test]
    async fn test_translate_missing_content_type_is_bad_request() {
        let groq = ScriptedProvider::new(ProviderFamily::Groq);
        let (status, json) = post_raw(
            app(groq, Some("gsk")),
            None,
            r#"{"text":"hi","targetLang":"en"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("Content-Type"));
    }

    #[tokio::test]
    async fn test_translate_wrong_field_type_is_bad_request() {
        let groq = ScriptedProvider::new(ProviderFamily::Groq);
        let (status, json) =
            post_json(app(groq, Some("gsk")), json!({ "text": "hi", "targetLang": 7 })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_translate_without_key_is_server_error() {
        let groq = ScriptedProvider::new(ProviderFamily::Groq);
        let (status, json) = post_json(
            app(groq.clone(), None),
            json!({ "text": "hi", "targetLang": "en" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].as_str().unwrap().contains("GROQ_API_KEY"));
        assert!(groq.calls().is_empty());
    }

    #[tokio::test]
    async fn test_translate_exhaustion_is_server_error() {
        let groq = ScriptedProvider::new(ProviderFamily::Groq)
            .reply("openai/gpt-oss-120b", Reply::RateLimited(429))
            .reply("llama-3.1-8b-instant", Reply::RateLimited(503));

        let (status, json) = post_json(
            app(groq, Some("gsk")),
            json!({
                "text": "this sentence is long enough to count",
                "sourceLang": "en",
                "targetLang": "de"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json["error"],
            "Rate limit hit for llama-3.1-8b-instant: 503 - rate limited"
        );
    }

    #[tokio::test]
    async fn test_languages_search() {
        let groq = ScriptedProvider::new(ProviderFamily::Groq);
        let json = get_json(app(groq.clone(), None), "/api/languages?q=deutsch").await;
        assert_json_eq!(
            json,
            json!({
                "data": [{ "code": "de", "name": "German", "nativeName": "Deutsch", "flag": "🇩🇪" }]
            })
        );

        let json = get_json(app(groq, None), "/api/languages").await;
        assert_eq!(json["data"].as_array().unwrap().len(), all_languages().len());
    }

    #[tokio::test]
    async fn test_models_and_health() {
        let groq = ScriptedProvider::new(ProviderFamily::Groq);

        let json = get_json(app(groq.clone(), None), "/api/models").await;
        let names: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["displayName"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Gemini Flash", "GPT-OSS 120B", "Llama 3.1 8B"]);

        let json = get_json(app(groq, None), "/").await;
        assert_eq!(json["status"], "ok");
    }
}
