//! EasyTerms comparison API server.
//!
//! Thin axum layer over the pure comparison engine and the LLM client.
//! Comparison requests always succeed once validated: LLM trouble degrades
//! to the deterministic fallback narrative instead of an error response.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use comparison_engine::ComparisonEngine;
use contract_core::NarrativeSummarizer;
use llm_client::{LlmClient, LlmConfig};

pub mod analyze_routes;
pub mod compare_routes;

/// Standard response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error type for handlers: an anyhow error plus the status it maps to.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    source: anyhow::Error,
}

impl AppError {
    pub fn with_status(status: StatusCode, source: anyhow::Error) -> Self {
        Self { status, source }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> String {
        self.source.to_string()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            source: err.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.source, "request failed");
        } else {
            tracing::debug!(status = %self.status, error = %self.source, "request rejected");
        }
        (
            self.status,
            Json(ApiResponse::<serde_json::Value>::error(
                self.source.to_string(),
            )),
        )
            .into_response()
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub engine: ComparisonEngine,
    /// Narrative generator for comparisons; `None` means fallback-only.
    pub summarizer: Option<Arc<dyn NarrativeSummarizer>>,
    /// Concrete LLM client for the analysis endpoint.
    pub llm: Option<Arc<LlmClient>>,
    pub analyze_max_chars: usize,
}

impl AppState {
    pub fn from_env() -> Self {
        let llm = LlmConfig::from_env().map(|config| Arc::new(LlmClient::new(config)));
        if llm.is_none() {
            tracing::warn!(
                "OPENAI_API_KEY not set; comparison narratives use the deterministic fallback \
                 and /api/analyze is unavailable"
            );
        }

        let analyze_max_chars = std::env::var("ANALYZE_MAX_CHARS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(llm_client::analyzer::DEFAULT_MAX_CHARS);

        Self {
            engine: ComparisonEngine::new(),
            summarizer: llm
                .clone()
                .map(|c| c as Arc<dyn NarrativeSummarizer>),
            llm,
            analyze_max_chars,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        compare_routes::compare_contracts,
        analyze_routes::analyze_contract,
        health
    ),
    tags(
        (name = "Comparison", description = "Deal comparison endpoints"),
        (name = "Analysis", description = "Contract analysis endpoints")
    )
)]
struct ApiDoc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    llm_configured: bool,
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service liveness and LLM availability")),
    tag = "Comparison"
)]
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        llm_configured: state.llm.is_some(),
    })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the router; separated from [`run_server`] for tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(compare_routes::compare_routes())
        .merge(analyze_routes::analyze_routes())
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,api_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::from_env();
    let app = build_router(state);

    let addr =
        std::env::var("EASYTERMS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    tracing::info!(%addr, "starting EasyTerms comparison API");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
