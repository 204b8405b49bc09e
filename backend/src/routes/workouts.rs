//! Workout API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::today;
use crate::services::workouts::{LoggedWorkout, TodayWorkout};
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use chrono::NaiveDate;
use fitflow_shared::{WorkoutLog, WorkoutPlan, WorkoutSplit};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ChangeSplitRequest {
    /// "Full Body", "Upper/Lower" or "Push/Pull/Legs"
    pub split: String,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct LogWorkoutRequest {
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub workout: WorkoutLog,
}

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/plan", put(change_split))
        .route("/today", get(workout_today))
        .route("/logs", post(log_workout))
}

/// PUT /api/v1/workouts/plan - Switch split and regenerate the plan
async fn change_split(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChangeSplitRequest>,
) -> ApiResult<Json<WorkoutPlan>> {
    let split: WorkoutSplit = req.split.parse()?;
    let plan = WorkoutService::change_split(state.store(), &auth.user_id, split).await?;
    Ok(Json(plan))
}

/// GET /api/v1/workouts/today - Scheduled day and a log template
async fn workout_today(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<TodayWorkout>> {
    let date = query.date.unwrap_or_else(today);
    let workout = WorkoutService::workout_for_date(state.store(), &auth.user_id, date).await?;
    Ok(Json(workout))
}

/// POST /api/v1/workouts/logs - Log a workout
async fn log_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogWorkoutRequest>,
) -> ApiResult<(StatusCode, Json<LoggedWorkout>)> {
    let date = req.date.unwrap_or_else(today);
    let logged = WorkoutService::log_workout(state.store(), &auth.user_id, date, req.workout).await?;
    Ok((StatusCode::CREATED, Json(logged)))
}
