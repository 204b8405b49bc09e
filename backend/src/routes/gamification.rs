//! Gamification API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::today;
use crate::services::gamification::{ChallengeCompletion, CheckInResult};
use crate::services::GamificationService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use fitflow_shared::{ChallengeBoard, ChallengeCategory};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Create gamification routes
pub fn gamification_routes() -> Router<AppState> {
    Router::new()
        .route("/check-in", post(check_in))
        .route("/challenges", post(assign_challenges))
        .route("/challenges/:category/complete", post(complete_challenge))
}

/// POST /api/v1/gamification/check-in - Apply the streak rule for today
async fn check_in(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CheckInResult>> {
    let result = GamificationService::check_in(state.store(), &auth.user_id, today()).await?;
    Ok(Json(result))
}

/// POST /api/v1/gamification/challenges - Draw this week's challenges
async fn assign_challenges(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ChallengeBoard>> {
    let mut rng = StdRng::from_entropy();
    let board = GamificationService::assign_challenges(state.store(), &auth.user_id, &mut rng).await?;
    Ok(Json(board))
}

/// POST /api/v1/gamification/challenges/:category/complete
async fn complete_challenge(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(category): Path<String>,
) -> ApiResult<Json<ChallengeCompletion>> {
    let category: ChallengeCategory = category.parse()?;
    let completion =
        GamificationService::complete_challenge(state.store(), &auth.user_id, category).await?;
    Ok(Json(completion))
}
