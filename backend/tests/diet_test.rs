//! Integration tests for diet endpoints

mod common;

use axum::http::StatusCode;
use common::{json_body, sample_profile, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_regenerate_plan_follows_current_targets() {
    let app = TestApp::new();
    let token = app.onboard("user-1", &sample_profile("Maintain")).await;
    app.put_auth("/api/v1/profile", &sample_profile("Cut").to_string(), &token)
        .await;

    // profile updates leave the diet plan alone until it is regenerated
    let (_, body) = app.get_auth("/api/v1/profile", &token).await;
    assert_eq!(json_body(&body)["diet"]["plan"]["monday"]["meals"][0]["calories"], 690);

    let (status, body) = app.post_auth("/api/v1/diet/plan", "{}", &token).await;

    assert_eq!(status, StatusCode::OK);
    let plan = json_body(&body);
    assert_eq!(plan.as_object().unwrap().len(), 7);
    assert_eq!(plan["monday"]["meals"][0]["calories"], 615);
}

#[tokio::test]
async fn test_log_meals_totals_day() {
    let app = TestApp::new();
    let token = app.onboard("user-1", &sample_profile("Maintain")).await;

    let breakfast = json!({
        "date": "2024-01-01",
        "meal": { "name": "Breakfast", "foodItem": "Oats", "calories": 450.0, "protein": 20.0 }
    });
    app.post_auth("/api/v1/diet/logs", &breakfast.to_string(), &token)
        .await;

    let lunch = json!({
        "date": "2024-01-01",
        "meal": { "name": "Lunch", "foodItem": "Chicken Salad", "calories": 600.0 }
    });
    let (status, body) = app
        .post_auth("/api/v1/diet/logs", &lunch.to_string(), &token)
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let logged = json_body(&body);
    assert_eq!(logged["totals"]["calories"], 1050.0);
    assert_eq!(logged["totals"]["protein"], 20.0);
    assert_eq!(logged["totals"]["fat"], 0.0);
    assert_eq!(logged["meals"]["breakfast"]["foodItem"], "Oats");
    assert_eq!(logged["meals"]["lunch"]["protein"], 0.0);
    // one diet day is half a point, rounded
    assert_eq!(logged["sciencePoints"], 1);
}

#[tokio::test]
async fn test_negative_calories_rejected() {
    let app = TestApp::new();
    let token = app.onboard("user-1", &sample_profile("Maintain")).await;

    let body = json!({
        "meal": { "name": "Snack", "foodItem": "Apple", "calories": -5.0 }
    });
    let (status, _) = app.post_auth("/api/v1/diet/logs", &body.to_string(), &token).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
