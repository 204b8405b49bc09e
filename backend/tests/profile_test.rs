//! Integration tests for onboarding and profile endpoints

mod common;

use axum::http::StatusCode;
use common::{json_body, sample_profile, TestApp};

#[tokio::test]
async fn test_profile_requires_auth() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/profile").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(&body)["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_profile_rejects_bad_token() {
    let app = TestApp::new();

    let (status, _) = app.get_auth("/api/v1/profile", "not-a-jwt").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_missing_before_onboarding() {
    let app = TestApp::new();
    let token = app.token_for("user-1");

    let (status, body) = app.get_auth("/api/v1/profile", &token).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_body(&body)["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_onboarding_builds_full_document() {
    let app = TestApp::new();
    let token = app.token_for("user-1");

    let (status, body) = app
        .post_auth("/api/v1/profile", &sample_profile("Maintain").to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let doc = json_body(&body);
    assert_eq!(doc["profile"]["name"], "Alex");
    assert_eq!(doc["profile"]["calculated"]["maintenanceCalories"], 2759);
    assert_eq!(doc["profile"]["calculated"]["dailyCalorieTarget"], 2759);
    assert_eq!(doc["workouts"]["plan"]["split"], "Full Body");
    assert_eq!(doc["diet"]["plan"]["monday"]["meals"][0]["calories"], 690);
    assert_eq!(doc["progress"]["weightChange"], "No data");
    assert_eq!(doc["gamification"]["streak"]["current"], 1);
    assert_eq!(doc["gamification"]["sciencePoints"], 0);
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_onboarding_twice_conflicts() {
    let app = TestApp::new();
    let token = app.onboard("user-1", &sample_profile("Maintain")).await;

    let (status, body) = app
        .post_auth("/api/v1/profile", &sample_profile("Bulk").to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json_body(&body)["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_onboarding_rejects_out_of_range_profile() {
    let app = TestApp::new();
    let token = app.token_for("user-1");
    let mut profile = sample_profile("Maintain");
    profile["age"] = 12.into();

    let (status, body) = app
        .post_auth("/api/v1/profile", &profile.to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json_body(&body)["error"]["code"], "VALIDATION_ERROR");
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_update_profile_recomputes_targets() {
    let app = TestApp::new();
    let token = app.onboard("user-1", &sample_profile("Maintain")).await;

    let (status, body) = app
        .put_auth("/api/v1/profile", &sample_profile("Cut").to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let doc = json_body(&body);
    assert_eq!(doc["profile"]["goal"], "Cut");
    assert_eq!(doc["profile"]["calculated"]["dailyCalorieTarget"], 2459);

    let (_, body) = app.get_auth("/api/v1/profile", &token).await;
    assert_eq!(json_body(&body)["profile"]["calculated"]["dailyCalorieTarget"], 2459);
}

#[tokio::test]
async fn test_documents_are_isolated_per_user() {
    let app = TestApp::new();
    app.onboard("user-1", &sample_profile("Maintain")).await;
    let other = app.token_for("user-2");

    let (status, _) = app.get_auth("/api/v1/profile", &other).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
