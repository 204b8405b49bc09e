//! Logged meals

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::CoreResult;
use crate::validation::{validate_non_negative, validate_required};

/// Meals logged on one day, keyed by lowercased meal type
pub type DayMealLog = BTreeMap<String, MealEntry>;

/// Meal logs keyed by date
pub type DietLogs = BTreeMap<NaiveDate, DayMealLog>;

/// One logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    /// Meal type as shown to the user, e.g. "Breakfast"
    pub name: String,
    pub food_item: String,
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
}

impl MealEntry {
    /// Key under which this meal is stored for its day
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    pub fn check(&self) -> CoreResult<()> {
        validate_required("meal name", &self.name)?;
        validate_required("food item", &self.food_item)?;
        validate_non_negative("calories", self.calories)?;
        validate_non_negative("protein", self.protein)?;
        validate_non_negative("carbs", self.carbs)?;
        validate_non_negative("fat", self.fat)
    }
}

/// Nutrients logged for a day, summed over its meals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

pub fn day_totals(day: &DayMealLog) -> DailyTotals {
    day.values().fold(DailyTotals::default(), |totals, meal| DailyTotals {
        calories: totals.calories + meal.calories,
        protein: totals.protein + meal.protein,
        carbs: totals.carbs + meal.carbs,
        fat: totals.fat + meal.fat,
    })
}
