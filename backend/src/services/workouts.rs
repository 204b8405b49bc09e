//! Workout service - plan selection and workout logging

use crate::error::ApiError;
use crate::repositories::DocumentStore;
use crate::services::{load_document, save_document};
use chrono::NaiveDate;
use fitflow_shared::{WorkoutDay, WorkoutLog, WorkoutPlan, WorkoutSplit};
use serde::Serialize;
use tracing::info;

/// The plan slot scheduled for a date, ready to be logged
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayWorkout {
    pub date: NaiveDate,
    pub split: WorkoutSplit,
    pub day: WorkoutDay,
    pub is_rest_day: bool,
    /// Log prefilled from the plan
    pub template: WorkoutLog,
    /// What was already logged for the date, if anything
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logged: Option<WorkoutLog>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedWorkout {
    pub date: NaiveDate,
    pub workout: WorkoutLog,
    pub total_sets: u32,
    pub science_points: u32,
}

/// Workout service for plan and log operations
pub struct WorkoutService;

impl WorkoutService {
    /// Switch to another split, regenerating the weekly plan
    pub async fn change_split(
        store: &dyn DocumentStore,
        user_id: &str,
        split: WorkoutSplit,
    ) -> Result<WorkoutPlan, ApiError> {
        let document = load_document(store, user_id)
            .await?
            .change_workout_split(split);
        save_document(store, user_id, &document).await?;

        info!(user_id, split = %split, "Workout split changed");
        Ok(document.workouts.plan)
    }

    pub async fn workout_for_date(
        store: &dyn DocumentStore,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<TodayWorkout, ApiError> {
        let document = load_document(store, user_id).await?;
        let plan = &document.workouts.plan;
        let day = plan.day_for_date(date).clone();

        Ok(TodayWorkout {
            date,
            split: plan.split,
            is_rest_day: day.is_rest(),
            template: day.to_log_template(),
            day,
            logged: document.workouts.logs.get(&date).cloned(),
        })
    }

    /// Record the workout for a date and refresh science points
    pub async fn log_workout(
        store: &dyn DocumentStore,
        user_id: &str,
        date: NaiveDate,
        workout: WorkoutLog,
    ) -> Result<LoggedWorkout, ApiError> {
        let document = load_document(store, user_id)
            .await?
            .log_workout(date, workout.clone())?;
        save_document(store, user_id, &document).await?;

        let science_points = document.gamification.science_points;
        info!(user_id, %date, science_points, "Workout logged");

        Ok(LoggedWorkout {
            date,
            total_sets: workout.total_sets(),
            workout,
            science_points,
        })
    }
}
