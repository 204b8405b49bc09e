//! Profile API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::today;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use fitflow_shared::{Profile, UserDocument};

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/", get(get_profile).post(create_profile).put(update_profile))
}

/// POST /api/v1/profile - Onboard: create the user document
async fn create_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(profile): Json<Profile>,
) -> ApiResult<(StatusCode, Json<UserDocument>)> {
    let document =
        ProfileService::create_profile(state.store(), &auth.user_id, profile, today()).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /api/v1/profile - Full user document
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserDocument>> {
    let document = ProfileService::get_document(state.store(), &auth.user_id).await?;
    Ok(Json(document))
}

/// PUT /api/v1/profile - Replace the profile and recompute targets
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(profile): Json<Profile>,
) -> ApiResult<Json<UserDocument>> {
    let document = ProfileService::update_profile(state.store(), &auth.user_id, profile).await?;
    Ok(Json(document))
}
