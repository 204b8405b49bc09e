//! Dashboard API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::today;
use crate::services::DashboardService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use fitflow_shared::DashboardSummary;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub date: Option<NaiveDate>,
}

/// Create dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}

/// GET /api/v1/dashboard - Streak, flow meter, targets and today's logs
async fn get_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Json<DashboardSummary>> {
    let date = query.date.unwrap_or_else(today);
    let mut rng = StdRng::from_entropy();
    let summary = DashboardService::summary(state.store(), &auth.user_id, date, &mut rng).await?;
    Ok(Json(summary))
}
