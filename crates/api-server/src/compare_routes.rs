//! Deal comparison endpoint.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;

use comparison_engine::fallback_narrative;
use contract_core::{CompareError, ComparisonReport, ContractForComparison};

use crate::{ApiResponse, AppError, AppState};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CompareRequest {
    #[schema(value_type = Vec<Object>)]
    pub contracts: Vec<ContractForComparison>,
}

pub fn compare_routes() -> Router<AppState> {
    Router::new().route("/api/compare", post(compare_contracts))
}

#[utoipa::path(
    post,
    path = "/api/compare",
    responses(
        (status = 200, description = "Per-metric comparison table with summary and recommendation"),
        (status = 400, description = "Fewer than two contracts supplied")
    ),
    tag = "Comparison"
)]
pub(crate) async fn compare_contracts(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<ApiResponse<ComparisonReport>>, AppError> {
    let metrics = state.engine.compare(&req.contracts).map_err(|e| {
        let status = match e {
            CompareError::TooFewContracts => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        AppError::with_status(status, e.into())
    })?;

    // Narrative must never sink the request: any summarizer failure falls
    // back to the deterministic template.
    let narrative = match state.summarizer.as_ref() {
        Some(summarizer) => match summarizer.summarize(&req.contracts, &metrics).await {
            Ok(narrative) => narrative,
            Err(e) => {
                tracing::warn!(error = %e, "LLM summary failed; using fallback narrative");
                fallback_narrative(&req.contracts, &metrics)
            }
        },
        None => fallback_narrative(&req.contracts, &metrics),
    };

    Ok(Json(ApiResponse::success(ComparisonReport {
        metrics,
        ai_summary: narrative.summary,
        recommendation: narrative.recommendation,
    })))
}
