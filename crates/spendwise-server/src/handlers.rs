//! HTTP request handlers for the advisor API

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use spendwise_core::GenerationBackend;

use crate::{AppError, AppState};

/// Request body for a submission
#[derive(Debug, Deserialize)]
pub struct AdviseRequest {
    /// Total income in VNĐ
    pub income: u64,
    /// Free-text expense list
    pub expenses: String,
}

/// Response body for a successful submission
#[derive(Debug, Serialize)]
pub struct AdviseResponse {
    /// Markdown report, exactly as the generation service returned it
    pub report: String,
    /// Model that produced the report
    pub model: String,
}

/// POST /api/advise - Run one submission through the workflow
pub async fn advise(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AdviseRequest>,
) -> Result<Json<AdviseResponse>, AppError> {
    let report = state.advisor.advise(body.income, &body.expenses).await?;

    Ok(Json(AdviseResponse {
        report: report.markdown,
        model: report.model,
    }))
}

/// Response body for the health endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Configured model identifier
    pub model: String,
    /// Live reachability of the generation backend
    pub available: bool,
}

/// GET /api/health - Backend model and reachability
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let client = state.advisor.client();

    Json(HealthResponse {
        model: client.model().to_string(),
        available: client.health_check().await,
    })
}
