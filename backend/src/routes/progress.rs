//! Weight progress API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::today;
use crate::services::progress::ProgressSummary;
use crate::services::ProgressService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

/// Weight log request; date defaults to today
#[derive(Debug, Deserialize)]
pub struct LogWeightRequest {
    pub weight: f64,
    pub date: Option<NaiveDate>,
}

/// Create progress routes
pub fn progress_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_progress))
        .route("/weight", post(log_weight))
}

/// POST /api/v1/progress/weight - Log a weight entry
async fn log_weight(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogWeightRequest>,
) -> ApiResult<(StatusCode, Json<ProgressSummary>)> {
    let date = req.date.unwrap_or_else(today);
    let summary = ProgressService::log_weight(state.store(), &auth.user_id, date, req.weight).await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// GET /api/v1/progress - Weight entries and trend
async fn get_progress(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProgressSummary>> {
    let summary = ProgressService::get_progress(state.store(), &auth.user_id).await?;
    Ok(Json(summary))
}
