//! Coach chat API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::CoachService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CoachRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CoachResponse {
    pub reply: String,
}

/// Create coach routes
pub fn coach_routes() -> Router<AppState> {
    Router::new().route("/messages", post(send_message))
}

/// POST /api/v1/coach/messages - Ask the coach a question
async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CoachRequest>,
) -> ApiResult<Json<CoachResponse>> {
    let reply =
        CoachService::ask(state.store(), state.coach(), &auth.user_id, &req.message).await?;
    Ok(Json(CoachResponse { reply }))
}
