use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use paj_ajap::{Translator, load_store_from_file};
use paj_ajap_mt::{
    CachedTranslation, DEFAULT_CAPACITY, GroqProvider, HybridTranslator, TranslationCache,
};

#[derive(Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
}

#[derive(Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
    /// Explanation of how the translation was produced
    pub raw: String,
}

#[derive(Deserialize)]
pub struct CacheQuery {
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Server settings read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PAJ_AJAP_BIND`
    pub bind: String,
    /// `PAJ_AJAP_STATIC_DIR`
    pub static_dir: PathBuf,
    /// `PAJ_AJAP_CACHE_SIZE`
    pub cache_size: usize,
    /// `PAJ_AJAP_CACHE_PASSWORD`; the cache endpoint refuses everyone when unset
    pub cache_password: Option<String>,
    /// `PAJ_AJAP_VOCABULARY`
    pub vocabulary: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let cache_size = match std::env::var("PAJ_AJAP_CACHE_SIZE") {
            Ok(value) => value.trim().parse().unwrap_or_else(|_| {
                warn!(
                    "Invalid PAJ_AJAP_CACHE_SIZE '{}', using {}",
                    value, DEFAULT_CAPACITY
                );
                DEFAULT_CAPACITY
            }),
            Err(_) => DEFAULT_CAPACITY,
        };

        Self {
            bind: std::env::var("PAJ_AJAP_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
            static_dir: std::env::var("PAJ_AJAP_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("paj-ajap-web/src/static")),
            cache_size,
            cache_password: std::env::var("PAJ_AJAP_CACHE_PASSWORD")
                .ok()
                .filter(|password| !password.is_empty()),
            vocabulary: std::env::var("PAJ_AJAP_VOCABULARY").ok().map(PathBuf::from),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub hybrid: Arc<HybridTranslator>,
    pub cache_password: Option<Arc<str>>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env();

    let translator = match &config.vocabulary {
        Some(path) => Translator::new(
            load_store_from_file(path)
                .map_err(|e| format!("Failed to load vocabulary: {}", e))?,
        ),
        None => Translator::default(),
    };
    let translator = Arc::new(translator);

    let mut hybrid = HybridTranslator::new(Arc::clone(&translator))
        .with_cache(Arc::new(TranslationCache::new(config.cache_size)));
    match GroqProvider::from_env(translator.store()) {
        Ok(provider) => {
            info!("Completion fallback: Groq ({})", provider.model());
            hybrid = hybrid.with_provider(Arc::new(provider));
        }
        Err(e) => warn!("Completion fallback disabled: {}", e),
    }
    if config.cache_password.is_none() {
        warn!("PAJ_AJAP_CACHE_PASSWORD not set, /api/cache is disabled");
    }

    let state = AppState {
        hybrid: Arc::new(hybrid),
        cache_password: config.cache_password.as_deref().map(Arc::from),
    };

    info!("Starting Paj Ajap translation server");

    let app = app(state, &config);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("🚀 Server running at http://{}", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/ping", get(ping))
        .route("/api/translate", post(translate_text))
        .route("/api/cache", get(show_cache))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

async fn ping() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ping": "pong" }))
}

async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Json<TranslateResponse> {
    let answer = state.hybrid.translate(&request.text).await;
    Json(TranslateResponse {
        translation: answer.translated,
        raw: answer.explanation,
    })
}

async fn show_cache(
    State(state): State<AppState>,
    Query(query): Query<CacheQuery>,
) -> Result<Json<BTreeMap<String, CachedTranslation>>, (StatusCode, Json<ErrorResponse>)> {
    let allowed = matches!(
        (state.cache_password.as_deref(), query.password.as_deref()),
        (Some(expected), Some(given)) if expected == given
    );
    if !allowed {
        warn!("Rejected cache request");
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                detail: "Access denied. Wrong password.".to_string(),
            }),
        ));
    }

    Ok(Json(state.hybrid.cache().snapshot()))
}
