//! Diet service - meal plan regeneration and meal logging

use crate::error::ApiError;
use crate::repositories::DocumentStore;
use crate::services::{load_document, save_document};
use chrono::NaiveDate;
use fitflow_shared::diet_log::{day_totals, DailyTotals};
use fitflow_shared::{DayMealLog, DietPlan, MealEntry};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedMeals {
    pub date: NaiveDate,
    pub meals: DayMealLog,
    /// Calories and macros summed over the day's meals
    pub totals: DailyTotals,
    pub science_points: u32,
}

/// Diet service for plan and log operations
pub struct DietService;

impl DietService {
    /// Rebuild the weekly diet plan from the current targets
    pub async fn regenerate_plan(
        store: &dyn DocumentStore,
        user_id: &str,
    ) -> Result<DietPlan, ApiError> {
        let document = load_document(store, user_id).await?.regenerate_diet_plan();
        save_document(store, user_id, &document).await?;

        info!(
            user_id,
            daily_calorie_target = document.targets().daily_calorie_target,
            "Diet plan regenerated"
        );
        Ok(document.diet.plan)
    }

    /// Log a meal; logging the same meal type twice on a date replaces it
    pub async fn log_meal(
        store: &dyn DocumentStore,
        user_id: &str,
        date: NaiveDate,
        meal: MealEntry,
    ) -> Result<LoggedMeals, ApiError> {
        let mut document = load_document(store, user_id).await?.log_meal(date, meal)?;
        save_document(store, user_id, &document).await?;

        let meals = document.diet.logs.remove(&date).unwrap_or_default();
        let science_points = document.gamification.science_points;
        info!(user_id, %date, meals = meals.len(), science_points, "Meal logged");

        Ok(LoggedMeals {
            date,
            totals: day_totals(&meals),
            meals,
            science_points,
        })
    }
}
