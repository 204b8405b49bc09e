//! Route definitions for the FitFlow API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use chrono::{NaiveDate, Utc};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod coach;
mod dashboard;
mod diet;
mod gamification;
mod health;
mod profile;
mod progress;
mod workouts;

pub use coach::coach_routes;
pub use dashboard::dashboard_routes;
pub use diet::diet_routes;
pub use gamification::gamification_routes;
pub use profile::profile_routes;
pub use progress::progress_routes;
pub use workouts::workout_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "FitFlow API v1" }))
        .nest("/profile", profile::profile_routes())
        .nest("/progress", progress::progress_routes())
        .nest("/workouts", workouts::workout_routes())
        .nest("/diet", diet::diet_routes())
        .nest("/gamification", gamification::gamification_routes())
        .nest("/coach", coach::coach_routes())
        .nest("/dashboard", dashboard::dashboard_routes())
}

/// Calendar date used when a request does not name one (UTC)
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}
