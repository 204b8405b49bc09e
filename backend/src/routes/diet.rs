//! Diet API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::today;
use crate::services::diet::LoggedMeals;
use crate::services::DietService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chrono::NaiveDate;
use fitflow_shared::{DietPlan, MealEntry};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LogMealRequest {
    pub date: Option<NaiveDate>,
    pub meal: MealEntry,
}

/// Create diet routes
pub fn diet_routes() -> Router<AppState> {
    Router::new()
        .route("/plan", post(regenerate_plan))
        .route("/logs", post(log_meal))
}

/// POST /api/v1/diet/plan - Regenerate the weekly diet plan
async fn regenerate_plan(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DietPlan>> {
    let plan = DietService::regenerate_plan(state.store(), &auth.user_id).await?;
    Ok(Json(plan))
}

/// POST /api/v1/diet/logs - Log a meal
async fn log_meal(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogMealRequest>,
) -> ApiResult<(StatusCode, Json<LoggedMeals>)> {
    let date = req.date.unwrap_or_else(today);
    let logged = DietService::log_meal(state.store(), &auth.user_id, date, req.meal).await?;
    Ok((StatusCode::CREATED, Json(logged)))
}
