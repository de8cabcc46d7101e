//! Single-contract analysis endpoint.

use anyhow::anyhow;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;

use contract_core::AnalyzedContract;

use crate::{ApiResponse, AppError, AppState};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub title: String,
    pub text: String,
}

pub fn analyze_routes() -> Router<AppState> {
    Router::new().route("/api/analyze", post(analyze_contract))
}

#[utoipa::path(
    post,
    path = "/api/analyze",
    responses(
        (status = 200, description = "Structured analysis of the contract text"),
        (status = 400, description = "Empty contract text"),
        (status = 502, description = "LLM analysis failed"),
        (status = 503, description = "No LLM configured")
    ),
    tag = "Analysis"
)]
pub(crate) async fn analyze_contract(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<ApiResponse<AnalyzedContract>>, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::with_status(
            StatusCode::BAD_REQUEST,
            anyhow!("Contract text is required"),
        ));
    }

    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::with_status(
            StatusCode::SERVICE_UNAVAILABLE,
            anyhow!("Contract analysis unavailable: no LLM configured"),
        )
    })?;

    let title = if req.title.trim().is_empty() {
        "Untitled Contract"
    } else {
        req.title.trim()
    };

    // Analysis has no deterministic fallback; unlike comparison, failure
    // surfaces to the caller.
    let analyzed = llm
        .analyze_contract(title, &req.text, state.analyze_max_chars)
        .await
        .map_err(|e| {
            AppError::with_status(StatusCode::BAD_GATEWAY, anyhow!("Contract analysis failed: {e}"))
        })?;

    Ok(Json(ApiResponse::success(analyzed)))
}
